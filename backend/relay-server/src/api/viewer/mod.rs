pub mod viewer;
pub mod viewer_page;
