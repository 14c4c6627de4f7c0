use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn running() -> impl Responder {
    HttpResponse::Ok().body("doctors portal is running")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(running);
}
