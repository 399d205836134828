pub mod create;
pub mod doctype_page;
pub mod form;
pub mod home;
pub mod list;
pub mod status;
pub mod view;

pub use create::CreatePage;
pub use doctype_page::DoctypePage;
pub use form::FormPage;
pub use home::HomePage;
pub use list::ListPage;
pub use status::{ErrorPage, LoadingPage, NotFoundPage};
pub use view::ViewPage;
