use elevate_core_contact_impl::ContactFeatureServiceImpl;
use elevate_email_impl::SendgridEmailServiceImpl;
use elevate_extern_impl::{relay::ContactRelayApiServiceImpl, sendgrid::SendgridApiServiceImpl};

// API
pub type RestServer = elevate_api_rest::RestServer<ContactFeature>;

// Extern
pub type SendgridApi = SendgridApiServiceImpl;
pub type ContactRelayApi = ContactRelayApiServiceImpl;

// Email
pub type Email = SendgridEmailServiceImpl<SendgridApi>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Email>;

// Form
pub type ContactForm = elevate_form::ContactForm<ContactRelayApi>;
