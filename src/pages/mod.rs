//! Admin Console Screens

mod categories;
mod currency;
mod error_page;
mod kyc;
mod login;
mod payments;
mod products;
mod reports;
mod schemes;
mod user_detail;
mod users;

pub use categories::CategoriesPage;
pub use currency::CurrencyPage;
pub use error_page::ErrorPage;
pub use kyc::KycPage;
pub use login::LoginPage;
pub use payments::PaymentsPage;
pub use products::ProductsPage;
pub use reports::ReportsPage;
pub use schemes::SchemesPage;
pub use user_detail::UserDetailPage;
pub use users::UsersPage;
