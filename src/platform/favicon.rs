//! Favicon sink (WASM)
//!
//! Publishes 32x32 frames by blitting them onto a hidden canvas and
//! pointing the document's `<link rel="icon">` at the canvas data URL.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{Clamped, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlLinkElement, ImageData};

#[cfg(target_arch = "wasm32")]
use crate::renderer::IconSink;

/// The document's favicon as an icon sink
#[cfg(target_arch = "wasm32")]
pub struct FaviconSink {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    link: HtmlLinkElement,
}

#[cfg(target_arch = "wasm32")]
impl FaviconSink {
    /// Bind to the hidden icon canvas and the favicon link, creating the
    /// link element when the page doesn't carry one.
    pub fn new(document: &Document, canvas_id: &str) -> Option<Self> {
        let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
        let ctx: CanvasRenderingContext2d =
            canvas.get_context("2d").ok()??.dyn_into().ok()?;

        let link: HtmlLinkElement = match document.query_selector("link[rel~='icon']").ok()? {
            Some(el) => el.dyn_into().ok()?,
            None => {
                let link: HtmlLinkElement =
                    document.create_element("link").ok()?.dyn_into().ok()?;
                link.set_rel("icon");
                link.set_type("image/png");
                document.head()?.append_child(&link).ok()?;
                link
            }
        };

        Some(Self { canvas, ctx, link })
    }
}

#[cfg(target_arch = "wasm32")]
impl IconSink for FaviconSink {
    fn publish(&mut self, rgba: &[u8], width: u32, height: u32) {
        let Ok(data) = ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba), width, height)
        else {
            return;
        };
        let _ = self.ctx.put_image_data(&data, 0.0, 0.0);
        if let Ok(url) = self.canvas.to_data_url_with_type("image/png") {
            self.link.set_href(&url);
        }
    }
}
