use std::sync::Arc;

/// Something that can be asked to redraw from a non-UI thread.
pub trait RepaintSink: Send + Sync + 'static {
    fn request_repaint(&self);
}

impl RepaintSink for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

impl<T: RepaintSink + ?Sized> RepaintSink for Arc<T> {
    fn request_repaint(&self) {
        (**self).request_repaint();
    }
}
