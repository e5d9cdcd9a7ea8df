pub mod relay;
pub mod sendgrid;
