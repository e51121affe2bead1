//! Fixture preview server: validate, count and generate schedules over REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//!
//! The server keeps no state; persisting the generated fixtures is up to the caller.

use actix_web::{
    get, post,
    web::{Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tournament_fixtures::{
    write_schedule_csv, FixtureGenerator, GenerationParams, Participant, TournamentId,
};

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ValidateBody {
    format: u8,
    participants: Vec<Participant>,
}

#[derive(Deserialize)]
struct GenerateBody {
    format: u8,
    tournament_id: TournamentId,
    participants: Vec<Participant>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

impl GenerateBody {
    fn params(&self) -> GenerationParams<'_> {
        GenerationParams::new(self.tournament_id, &self.participants)
            .with_dates(self.start_date, self.end_date)
    }
}

/// Path segment: format code (e.g. /api/formats/{code}/count)
#[derive(Deserialize)]
struct FormatPath {
    code: u8,
}

#[derive(Deserialize)]
struct CountQuery {
    participants: usize,
}

#[derive(serde::Serialize)]
struct CountResponse {
    format: u8,
    participants: usize,
    matches: usize,
}

fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-fixtures",
    })
}

/// List every supported format with its participant limits.
#[get("/api/formats")]
async fn api_list_formats() -> HttpResponse {
    HttpResponse::Ok().json(FixtureGenerator::describe_all())
}

/// Expected match count for a participant count, before generating anything.
#[get("/api/formats/{code}/count")]
async fn api_count_matches(path: Path<FormatPath>, query: Query<CountQuery>) -> HttpResponse {
    let generator = match FixtureGenerator::new(path.code) {
        Ok(g) => g,
        Err(e) => return bad_request(e),
    };
    if let Some(max) = generator.describe().max_participants {
        if query.participants > max {
            return bad_request(format!(
                "El formato admite como máximo {max} participantes (se pidieron {}).",
                query.participants
            ));
        }
    }
    HttpResponse::Ok().json(CountResponse {
        format: path.code,
        participants: query.participants,
        matches: generator.count_matches(query.participants),
    })
}

/// Validate a participant list for a format. A failed validation is still a 200 with valid=false.
#[post("/api/fixtures/validate")]
async fn api_validate(body: Json<ValidateBody>) -> HttpResponse {
    match FixtureGenerator::new(body.format) {
        Ok(generator) => HttpResponse::Ok().json(generator.validate(&body.participants)),
        Err(e) => bad_request(e),
    }
}

/// Generate fixtures and matches (matches reference fixtures by index).
#[post("/api/fixtures/generate")]
async fn api_generate(body: Json<GenerateBody>) -> HttpResponse {
    let generator = match FixtureGenerator::new(body.format) {
        Ok(g) => g,
        Err(e) => return bad_request(e),
    };
    match generator.generate(&body.params()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => bad_request(e),
    }
}

/// Generate and return the schedule as CSV.
#[post("/api/fixtures/export")]
async fn api_export(body: Json<GenerateBody>) -> HttpResponse {
    let generator = match FixtureGenerator::new(body.format) {
        Ok(g) => g,
        Err(e) => return bad_request(e),
    };
    let result = match generator.generate(&body.params()) {
        Ok(r) => r,
        Err(e) => return bad_request(e),
    };
    let mut buf = Vec::new();
    if let Err(e) = write_schedule_csv(&result, &body.participants, &mut buf) {
        log::error!("CSV export failed for tournament {}: {}", body.tournament_id, e);
        return HttpResponse::InternalServerError().body("export error");
    }
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(buf)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_list_formats)
            .service(api_count_matches)
            .service(api_validate)
            .service(api_generate)
            .service(api_export)
    })
    .bind(bind)?
    .run()
    .await
}
