use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement};

/// The media controls a hover preview drives.
pub trait PreviewTarget {
    fn mute(&self);
    fn start(&self);
    fn pause(&self);
    fn rewind(&self);
}

impl PreviewTarget for HtmlVideoElement {
    // The `muted` attribute on a script-created element does not set the
    // property, and an unmuted play outside a user gesture is refused.
    fn mute(&self) {
        self.set_muted(true);
    }

    fn start(&self) {
        match self.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("Preview playback rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("Preview playback failed: {:?}", e),
        }
    }

    fn pause(&self) {
        if let Err(e) = HtmlMediaElement::pause(self) {
            log::debug!("Failed to pause preview: {:?}", e);
        }
    }

    fn rewind(&self) {
        self.set_current_time(0.0);
    }
}

/// Starts a muted preview. Autoplay policies may refuse; that is ignored.
pub fn play_preview(target: &impl PreviewTarget) {
    target.mute();
    target.start();
}

/// Pauses and rewinds so the next hover starts from the first frame.
pub fn stop_preview(target: &impl PreviewTarget) {
    target.pause();
    target.rewind();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<&'static str>>,
    }

    impl PreviewTarget for Recorder {
        fn mute(&self) {
            self.calls.borrow_mut().push("mute");
        }
        fn start(&self) {
            self.calls.borrow_mut().push("start");
        }
        fn pause(&self) {
            self.calls.borrow_mut().push("pause");
        }
        fn rewind(&self) {
            self.calls.borrow_mut().push("rewind");
        }
    }

    #[test]
    fn preview_is_muted_before_it_starts() {
        let video = Recorder::default();
        play_preview(&video);
        assert_eq!(*video.calls.borrow(), vec!["mute", "start"]);
    }

    #[test]
    fn stopping_pauses_then_rewinds() {
        let video = Recorder::default();
        stop_preview(&video);
        assert_eq!(*video.calls.borrow(), vec!["pause", "rewind"]);
    }
}
