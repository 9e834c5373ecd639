use super::endpoints::DocEndpoints;
use super::response::write_reply;
use crate::docs::DocumentModelCache;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use tracing::debug;

/// may_minihttp service answering the documentation endpoints.
///
/// Clones share the same [`DocumentModelCache`], so every connection sees
/// one published model.
#[derive(Debug, Clone)]
pub struct DocService {
    endpoints: DocEndpoints,
}

impl DocService {
    pub fn new(cache: Arc<DocumentModelCache>) -> Self {
        Self {
            endpoints: DocEndpoints::new(cache),
        }
    }
}

impl HttpService for DocService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let reply = self.endpoints.handle(req.method(), req.path());
        debug!(
            method = req.method(),
            path = req.path(),
            status = reply.status,
            "Documentation request"
        );
        write_reply(res, reply);
        Ok(())
    }
}
