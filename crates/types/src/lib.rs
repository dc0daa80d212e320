pub mod color;
pub mod geometry;
pub mod ids;
pub mod page;
pub mod record;

pub use color::Color;
pub use geometry::Rect;
pub use ids::RecordId;
pub use page::{Margins, PageSize};
pub use record::LoanRecord;
