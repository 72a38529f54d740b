use axum::{body::Body, extract::Request, http::header, response::Response};
use rust_embed::RustEmbed;
use std::{convert::Infallible, future::Future, pin::Pin};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves the embedded `static/` directory.
#[derive(Debug, Default, Clone)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let uri = req.uri().clone();

        Box::pin(async move {
            let resp = match Assets::get(uri.path()) {
                Some(content) => {
                    let mime = mime_guess::from_path(uri.path()).first_or_octet_stream();

                    Response::builder()
                        .header(header::CONTENT_TYPE, mime.as_ref())
                        .body(Body::from(content.data))
                        .unwrap()
                }
                _ => Response::builder()
                    .status(404)
                    .body(Body::from("404 Not Found"))
                    .unwrap(),
            };

            Ok(resp)
        })
    }
}
