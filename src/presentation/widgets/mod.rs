mod button;
mod footer_bar;
mod header_bar;
mod row_list;
mod status_bar;

pub use button::{Button, ButtonState};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use row_list::{RowList, RowListState};
pub use status_bar::{StatusBar, StatusLevel};
