//! Service modules grouping the Marketo API operations.

pub mod campaigns;
pub mod leads;
pub mod lists;

pub use campaigns::CampaignsService;
pub use leads::LeadsService;
pub use lists::ListsService;
