pub mod app_state;
pub mod card_view;
pub mod edit_form;
pub mod user_record;

pub use app_state::{build_http_client, AppState};
pub use card_view::CardView;
pub use edit_form::{EditForm, FieldErrors, SaveForm};
pub use user_record::{Address, Company, UserRecord};
