//! Hero background video. Autoplay is best-effort: browsers are free to
//! reject it and the page must look fine without the video.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlVideoElement};

pub struct HeroVideo;

impl HeroVideo {
    pub fn attach(document: &Document) {
        let video = document
            .get_element_by_id("heroVideo")
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
        let hero = crate::dom::query(document, ".hero");
        let (video, hero) = match (video, hero) {
            (Some(video), Some(hero)) => (video, hero),
            _ => {
                debug!("hero video not in page, skipping");
                return;
            }
        };

        video.set_muted(true);
        let _ = video.set_attribute("playsinline", "");
        video.set_loop(true);

        let on_loaded = {
            let hero = hero.clone();
            let video = video.clone();
            Closure::wrap(Box::new(move || {
                let _ = hero.class_list().add_1("has-video");
                try_play(&video);
            }) as Box<dyn FnMut()>)
        };
        video
            .add_event_listener_with_callback("loadeddata", on_loaded.as_ref().unchecked_ref())
            .unwrap();
        on_loaded.forget();

        let on_error = {
            let hero: Element = hero.clone();
            Closure::wrap(Box::new(move || {
                let _ = hero.class_list().remove_1("has-video");
            }) as Box<dyn FnMut()>)
        };
        video
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .unwrap();
        on_error.forget();

        try_play(&video);
    }
}

/// Kick off playback and swallow the rejection autoplay policies produce.
fn try_play(video: &HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}
