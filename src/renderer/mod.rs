//! CPU rendering module
//!
//! The playfield is painted into an RGBA frame buffer, then box-downsampled
//! into a 32x32 buffer that an icon sink publishes as the favicon.

pub mod frame;
pub mod scene;

pub use frame::{FrameBuffer, Rgb, downsample_into};
pub use scene::draw_frame;

/// Consumer of finished icon frames (the tab's favicon, in the browser)
pub trait IconSink {
    fn publish(&mut self, rgba: &[u8], width: u32, height: u32);
}

/// Clear the icon surface, downsample the frame into it, hand it to the
/// sink. Runs once per rendered frame, so the icon refreshes at the
/// render rate.
pub fn publish_icon(frame: &FrameBuffer, icon: &mut FrameBuffer, sink: &mut dyn IconSink) {
    icon.clear(Rgb(0, 0, 0));
    downsample_into(frame, icon);
    sink.publish(icon.data(), icon.width(), icon.height());
}
