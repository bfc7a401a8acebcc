//! App Router

use salvo::Router;

use crate::{carts, floors, stock};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .patch(carts::update::handler)
                        .delete(carts::delete::handler)
                        .push(
                            Router::with_path("accesses")
                                .post(carts::accesses::create::handler)
                                .push(
                                    Router::with_path("{user}")
                                        .patch(carts::accesses::update::handler)
                                        .delete(carts::accesses::delete::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("default-stock")
                .get(stock::get::handler)
                .put(stock::update::handler),
        )
        .push(
            Router::with_path("floors")
                .get(floors::index::handler)
                .push(Router::with_path("refresh").post(floors::refresh::handler))
                .push(Router::with_path("{floor}/cycle").post(floors::cycle::handler)),
        )
}
