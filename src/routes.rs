use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::DbPool,
    error::ApiError,
    matcher::TOP_FOOD_KEYWORDS,
    nutrient::Nutrient,
    phases::{foods_for_phase, Phase},
    query,
    ranking::{top_foods_by_keywords, Percentage},
};

const DEFAULT_TOP_PERCENTAGE: f64 = 0.20;
const DEFAULT_PHASE_PERCENTAGE: f64 = 0.1;

#[derive(Debug, Deserialize)]
pub struct TopFoodsParams {
    pub nutrient: String,
    #[serde(default = "default_top_percentage")]
    pub percentage: f64,
}

#[derive(Debug, Deserialize)]
pub struct PhaseParams {
    pub phase: String,
    #[serde(default = "default_phase_percentage")]
    pub percentage: f64,
}

fn default_top_percentage() -> f64 {
    DEFAULT_TOP_PERCENTAGE
}

fn default_phase_percentage() -> f64 {
    DEFAULT_PHASE_PERCENTAGE
}

#[get("/")]
async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "Hello": "World" }))
}

#[get("/foods/")]
async fn get_all_foods(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let foods = web::block(move || {
        let conn = pool.get()?;
        query::find_all_foods(&conn).map_err(ApiError::from)
    })
    .await??;
    Ok(HttpResponse::Ok().json(foods))
}

#[get("/food/{item_id}")]
async fn get_food(
    item_id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let foods = web::block(move || {
        let conn = pool.get()?;
        query::find_food(item_id.into_inner(), &conn).map_err(ApiError::from)
    })
    .await??;
    Ok(HttpResponse::Ok().json(foods))
}

#[get("/categories/")]
async fn get_categories(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let categories = web::block(move || {
        let conn = pool.get()?;
        query::find_categories(&conn).map_err(ApiError::from)
    })
    .await??;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/names/")]
async fn get_names(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let names = web::block(move || {
        let conn = pool.get()?;
        query::find_names(&conn).map_err(ApiError::from)
    })
    .await??;
    Ok(HttpResponse::Ok().json(names))
}

#[get("/top-foods/")]
async fn get_top_foods(
    params: web::Query<TopFoodsParams>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let percentage = Percentage::new(params.percentage)?;
    let nutrient: Nutrient = params.nutrient.parse()?;

    let top_foods = web::block(move || {
        let conn = pool.get()?;
        top_foods_by_keywords(&conn, &TOP_FOOD_KEYWORDS, percentage, nutrient)
            .map_err(ApiError::from)
    })
    .await??;
    Ok(HttpResponse::Ok().json(top_foods))
}

#[get("/food-by-phase/")]
async fn get_food_by_phase(
    params: web::Query<PhaseParams>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let phase: Phase = params.phase.parse()?;
    let percentage = Percentage::new(params.percentage)?;

    let top_foods = web::block(move || {
        let conn = pool.get()?;
        foods_for_phase(&conn, phase, percentage).map_err(ApiError::from)
    })
    .await??;
    Ok(HttpResponse::Ok().json([top_foods]))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(read_root)
        .service(get_all_foods)
        .service(get_food)
        .service(get_categories)
        .service(get_names)
        .service(get_top_foods)
        .service(get_food_by_phase);
}
