pub mod filter;
pub mod store;
pub mod types;

pub use filter::{filter_by_status, StatusFilter};
pub use store::{get_lead_book_path, load_lead_book, save_lead_book, LeadBook, LeadStore};
pub use types::{Activity, ActivityType, CompanyData, Funding, Lead, LeadStatus, Owner};
