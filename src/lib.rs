use worker::*;

pub mod config;
mod handlers;
pub mod media;
pub mod utils;

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    // Strip trailing slash (except root) and route the rewritten request
    let url = req.url()?;
    let path = url.path().to_string();

    if path.len() > 1 && path.ends_with('/') {
        let mut new_url = url.clone();
        new_url.set_path(path.trim_end_matches('/'));
        let new_req = Request::new_with_init(
            new_url.as_str(),
            &RequestInit {
                method: req.method(),
                headers: req.headers().clone(),
                ..Default::default()
            },
        )?;
        return build_router().run(new_req, env).await;
    }

    build_router().run(req, env).await
}

fn build_router() -> Router<'static, ()> {
    Router::new()
        .get_async("/p/:code", |req, ctx| async move {
            handlers::media::post(req, ctx).await
        })
        .get_async("/media", |req, ctx| async move {
            handlers::media::lookup(req, ctx).await
        })
        .get_async("/u/:username", |req, ctx| async move {
            handlers::media::account(req, ctx).await
        })
}
