use crate::screen::ScreenPatch;

/// Outbound port to the rendering layer.
///
/// `post` enqueues a patch for application on the single UI-affine
/// context. Posting to a screen that is no longer alive is a silent
/// no-op: in-flight flows finish fire-and-forget.
pub trait ScreenSinkPort: Send + Sync {
    fn post(&self, patch: ScreenPatch);
}
