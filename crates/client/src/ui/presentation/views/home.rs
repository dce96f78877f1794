//! Home page - featured stats and recommendations

use dioxus::prelude::*;

use crate::ui::presentation::components::SongCard;

struct FeaturedSong {
    title: &'static str,
    artist: &'static str,
    genre: &'static str,
}

static FEATURED_SONGS: [FeaturedSong; 2] = [
    FeaturedSong {
        title: "Song Title",
        artist: "Artist Name",
        genre: "Genre",
    },
    FeaturedSong {
        title: "Another Song",
        artist: "Another Artist",
        genre: "Pop",
    },
];

#[allow(non_snake_case)]
pub fn HomePage() -> Element {
    rsx! {
        div {
            class: "page home-page",

            div {
                class: "home-featured",
                h2 { "Featured Stats" }
                p { class: "subtext", "Top Songs of the Day" }

                div {
                    class: "home-featured-stats",
                    for song in FEATURED_SONGS.iter() {
                        div {
                            key: "{song.title}",
                            class: "featured-song",
                            SongCard { avatar_only: true, size: 80 }
                            div {
                                class: "song-info-box",
                                p { class: "song-title", "{song.title}" }
                                p { class: "song-artist", "{song.artist}" }
                                p { class: "song-genre", "{song.genre}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "home-featured",
                h2 { "Featured Recs" }
                div {
                    class: "home-featured-recs",
                    SongCard {}
                }
            }
        }
    }
}
