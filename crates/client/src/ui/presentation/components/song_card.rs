//! Song card - circular artwork placeholder with optional text

use dioxus::prelude::*;

/// Props for the SongCard component
#[derive(Props, Clone, PartialEq)]
pub struct SongCardProps {
    /// Render only the artwork circle, no text block
    #[props(default = false)]
    pub avatar_only: bool,
    /// Artwork diameter in pixels
    #[props(default = 70)]
    pub size: u32,
}

/// Placeholder song entry: artwork circle plus name/artist text.
///
/// Pages lay their own text next to an `avatar_only` card when they
/// need more than the default two lines.
#[component]
pub fn SongCard(props: SongCardProps) -> Element {
    let size = props.size;

    rsx! {
        div {
            class: if props.avatar_only { "song-card avatar-only" } else { "song-card" },

            div {
                class: "song-artwork",
                style: "width: {size}px; height: {size}px; min-width: {size}px;",
            }

            if !props.avatar_only {
                div {
                    class: "song-info",
                    p { class: "song-name", "Song Name" }
                    p { class: "artist-name", "Artist Name" }
                }
            }
        }
    }
}
