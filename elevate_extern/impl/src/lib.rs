pub mod relay;
pub mod sendgrid;

mod http;
