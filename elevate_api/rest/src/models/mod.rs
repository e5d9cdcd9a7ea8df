use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiSuccess {
    pub success: bool,
}
