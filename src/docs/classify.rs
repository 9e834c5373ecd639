use crate::registry::{ResponseKind, RouteMetadataProvider};

/// Whether a handler is a candidate for the JSON documentation at all.
///
/// It must write a response body (views and redirects are skipped) and
/// must not be marked hidden. A method-level marking overrides the
/// controller's; no marking means visible.
pub fn is_documentable<P: RouteMetadataProvider + ?Sized>(handler: &P) -> bool {
    handler.response_kind() == ResponseKind::Body && !handler.is_hidden()
}
