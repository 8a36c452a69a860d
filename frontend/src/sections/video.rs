use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::RevealOptions;
use crate::animation::trigger;
use crate::content::Video;
use crate::controllers::section::RevealPlan;
use crate::hooks::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    pub video: Video,
}

#[function_component(VideoSection)]
pub fn video_section(props: &VideoProps) -> Html {
    let caption_ref = use_node_ref();
    let frame_ref = use_node_ref();

    {
        let caption_ref = caption_ref.clone();
        let frame_ref = frame_ref.clone();
        use_scroll_reveal("video", move || {
            RevealPlan::new()
                .reveal(
                    caption_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(40.0), trigger::top(85.0)),
                )
                .reveal(
                    frame_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(60.0), trigger::top(85.0)).duration(1.2),
                )
        });
    }

    let video = &props.video;

    html! {
        <section id="video" class="video-section">
            <div ref={caption_ref} class="video-caption">
                <p>{ video.caption.clone() }</p>
            </div>

            <div ref={frame_ref} class="video-frame">
                { frame_view(video.embed_url.as_deref()) }
            </div>

            <style>
                {r#"
                    .video-section {
                        position: relative;
                        padding: 8rem 3rem 8rem 7rem;
                    }

                    .video-caption {
                        margin-bottom: 3rem;
                    }

                    .video-caption p {
                        max-width: 48rem;
                        font-family: var(--font-mono);
                        font-size: 1.2rem;
                        line-height: 1.7;
                    }

                    .video-frame {
                        position: relative;
                        width: 100%;
                        max-width: 64rem;
                        aspect-ratio: 16 / 9;
                        background: var(--card);
                        border: 1px solid var(--border);
                        overflow: hidden;
                    }

                    .video-frame iframe {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }

                    .video-placeholder {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-family: var(--font-mono);
                        font-size: 0.85rem;
                        color: var(--muted);
                    }

                    @media (max-width: 768px) {
                        .video-section {
                            padding: 6rem 1.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn frame_view(embed_url: Option<&str>) -> Html {
    match embed_url {
        Some(src) => html! {
            <iframe
                src={src.to_string()}
                title="Video"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=true
            />
        },
        None => html! {
            <div class="video-placeholder">
                <p>{"Video coming soon"}</p>
            </div>
        },
    }
}
