pub mod handout_handler;
pub mod health_handler;

use actix_web::web;

pub use handout_handler::view_handout;
pub use health_handler::{health_check, health_check_live, health_check_ready};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(view_handout);
}
