//! Embedded product video.

use crate::config::video_embed_url;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct VideoEmbedProps {
    pub video_id: String,
    #[props(default = "SafeDrop Video".to_string())]
    pub title: String,
}

#[component]
pub fn VideoEmbed(props: VideoEmbedProps) -> Element {
    let src = video_embed_url(&props.video_id);
    rsx! {
        div {
            style: "position: relative; overflow: hidden; border-radius: 16px; border: 2px solid rgba(255,255,255,0.2); background: #0f172a; box-shadow: 0 20px 40px rgba(0,0,0,0.4);",
            div {
                style: "aspect-ratio: 16 / 9;",
                iframe {
                    src: "{src}",
                    title: "{props.title}",
                    style: "width: 100%; height: 100%; border: 0;",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                    allowfullscreen: true,
                    "loading": "lazy",
                }
            }
        }
    }
}
