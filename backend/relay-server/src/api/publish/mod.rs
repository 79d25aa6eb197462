pub mod form_page;
pub mod publish;
pub mod publish_form;
pub mod publish_response;
