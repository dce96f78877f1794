//! Chrome and shared presentational components.

mod navbar_desktop;
mod navbar_mobile;
mod profile_button;
mod song_card;

pub use navbar_desktop::{NavbarDesktop, DESKTOP_NAV_LINKS};
pub use navbar_mobile::{NavItem, NavbarMobile, MOBILE_NAV_ITEMS};
pub use profile_button::ProfileButton;
pub use song_card::{SongCard, SongCardProps};
