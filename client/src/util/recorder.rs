//! Microphone capture seam and its browser `MediaRecorder` implementation.
//!
//! DESIGN
//! ======
//! `Microphone::open` starts a capture; `Capture::halt` stops it and releases
//! the device synchronously; `Capture::finish` waits for the recorder's last
//! fragment and assembles the payload. Splitting halt from finish lets the
//! click handler free the device before any await point.
//!
//! The browser types are gated behind `#[cfg(feature = "hydrate")]`.

use crate::error::ChatError;

/// Source of capture sessions.
#[allow(async_fn_in_trait)]
pub trait Microphone {
    type Capture: Capture;

    /// Ask for the device and start recording.
    async fn open(&self) -> Result<Self::Capture, ChatError>;
}

/// One running recording.
#[allow(async_fn_in_trait)]
pub trait Capture {
    /// Assembled recording.
    type Payload;

    /// Stop recording and release the device. Idempotent.
    fn halt(&mut self);

    /// Wait for buffered fragments and join them into one payload.
    async fn finish(self) -> Result<Self::Payload, ChatError>;
}

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(feature = "hydrate")]
use crate::error::js_detail;
#[cfg(feature = "hydrate")]
use crate::net::api::AUDIO_MIME;

/// `navigator.mediaDevices` audio input.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMicrophone;

/// A live `MediaRecorder` over a microphone stream.
///
/// Tracks are stopped on `halt` and again on drop, so the device is never
/// left open by an abandoned capture.
#[cfg(feature = "hydrate")]
pub struct MediaCapture {
    recorder: web_sys::MediaRecorder,
    stream: web_sys::MediaStream,
    chunks: Rc<RefCell<Vec<web_sys::Blob>>>,
    stopped: Option<futures::channel::oneshot::Receiver<()>>,
    on_stop: Option<Closure<dyn FnMut()>>,
    _on_data: Closure<dyn FnMut(web_sys::BlobEvent)>,
}

#[cfg(feature = "hydrate")]
fn microphone_error(err: JsValue) -> ChatError {
    ChatError::Microphone(js_detail(&err))
}

#[cfg(feature = "hydrate")]
fn release_tracks(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}

#[cfg(feature = "hydrate")]
impl Microphone for BrowserMicrophone {
    type Capture = MediaCapture;

    async fn open(&self) -> Result<MediaCapture, ChatError> {
        let window = web_sys::window().ok_or_else(|| ChatError::Microphone("no window".to_owned()))?;
        let devices = window.navigator().media_devices().map_err(microphone_error)?;
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(microphone_error)?;
        let stream = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(microphone_error)?
            .dyn_into::<web_sys::MediaStream>()
            .map_err(microphone_error)?;

        let recorder = match web_sys::MediaRecorder::new_with_media_stream(&stream) {
            Ok(recorder) => recorder,
            Err(err) => {
                release_tracks(&stream);
                return Err(microphone_error(err));
            }
        };

        let chunks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&chunks);
        let on_data = Closure::<dyn FnMut(web_sys::BlobEvent)>::new(move |ev: web_sys::BlobEvent| {
            if let Some(blob) = ev.data() {
                sink.borrow_mut().push(blob);
            }
        });
        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));

        let capture = MediaCapture { recorder, stream, chunks, stopped: None, on_stop: None, _on_data: on_data };
        capture.recorder.start().map_err(microphone_error)?;
        Ok(capture)
    }
}

#[cfg(feature = "hydrate")]
impl Capture for MediaCapture {
    type Payload = web_sys::Blob;

    fn halt(&mut self) {
        if self.on_stop.is_none() {
            let (tx, rx) = futures::channel::oneshot::channel();
            let mut tx = Some(tx);
            let on_stop = Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(());
                }
            });
            self.recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));
            match self.recorder.stop() {
                Ok(()) => self.stopped = Some(rx),
                Err(err) => leptos::logging::warn!("recorder stop failed: {}", js_detail(&err)),
            }
            self.on_stop = Some(on_stop);
        }
        release_tracks(&self.stream);
    }

    async fn finish(mut self) -> Result<web_sys::Blob, ChatError> {
        self.halt();
        if let Some(stopped) = self.stopped.take() {
            let _ = stopped.await;
        }

        let parts = js_sys::Array::new();
        for chunk in self.chunks.borrow().iter() {
            parts.push(chunk);
        }
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(AUDIO_MIME);
        web_sys::Blob::new_with_blob_sequence_and_options(&parts, &options)
            .map_err(|e| ChatError::Capture(js_detail(&e)))
    }
}

#[cfg(feature = "hydrate")]
impl Drop for MediaCapture {
    fn drop(&mut self) {
        self.recorder.set_ondataavailable(None);
        self.recorder.set_onstop(None);
        release_tracks(&self.stream);
    }
}
