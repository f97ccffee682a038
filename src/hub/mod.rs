pub mod page;
pub mod panels;
pub mod surface;

pub use page::{HubPage, HubTab};
pub use surface::{BannerKind, EguiSurface, Surface};
