use std::path::{Path, PathBuf};

use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{
    error, get, middleware, post, web, App, Error, HttpRequest, HttpResponse, HttpServer,
    Responder,
};
use serde_json::json;
use tracing::info;

use word_finder::models::{
    SynonymRequest, SynonymResponse, WordSearchRequest, WordSearchResponse,
};
use word_finder::translator::HttpTranslator;
use word_finder::word_service::{find_matching_words, find_synonyms};
use word_finder::word_store::WordStore;
use word_finder::{
    save_search_results, save_synonym_results, search_output_path, synonym_output_path,
    SEARCH_DOWNLOAD_NAME, SEARCH_OUTPUT_FILE, SYNONYM_DOWNLOAD_NAME, SYNONYM_OUTPUT_FILE,
};

#[derive(Clone)]
struct AppConfig {
    results_dir: PathBuf,
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Malayalam Word Finder API",
        "endpoints": {
            "POST /search": "Search for words with matching endings",
            "POST /synonyms": "Find words with similar meanings",
            "GET /download": "Download last search results",
            "GET /download-synonyms": "Download last synonym results"
        }
    }))
}

#[post("/search")]
async fn search_words(
    store: web::Data<WordStore>,
    config: web::Data<AppConfig>,
    request: web::Json<WordSearchRequest>,
) -> Result<impl Responder, Error> {
    let request = request.into_inner();
    let results_dir = config.results_dir.clone();
    let scan_request = request.clone();
    let total_matches = web::block(move || {
        let matches = find_matching_words(
            store.get_ref(),
            &scan_request.input_word,
            scan_request.match_length,
            scan_request.word_length,
            scan_request.operator,
            scan_request.match_position,
        );
        save_search_results(&results_dir, &scan_request, &matches)?;
        Ok::<_, std::io::Error>(matches.len())
    })
    .await?
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(WordSearchResponse {
        message: "Search completed successfully. Download the file to view results.".to_string(),
        input_word: request.input_word,
        match_length: request.match_length,
        word_length: request.word_length,
        operator: request.operator,
        match_position: request.match_position,
        total_matches,
        output_file: SEARCH_OUTPUT_FILE.to_string(),
    }))
}

#[post("/synonyms")]
async fn synonyms(
    store: web::Data<WordStore>,
    translator: web::Data<HttpTranslator>,
    config: web::Data<AppConfig>,
    request: web::Json<SynonymRequest>,
) -> Result<impl Responder, Error> {
    let request = request.into_inner();
    let results = find_synonyms(
        store.get_ref(),
        translator.get_ref(),
        &request.word,
        request.max_results,
    )
    .await;

    let total_matches = results.len();
    let results_dir = config.results_dir.clone();
    let dump_request = request.clone();
    web::block(move || save_synonym_results(&results_dir, &dump_request, &results))
        .await?
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(SynonymResponse {
        message: "Synonym search completed. Download the file to view results.".to_string(),
        input_word: request.word,
        total_matches,
        output_file: SYNONYM_OUTPUT_FILE.to_string(),
    }))
}

#[get("/download")]
async fn download_results(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, Error> {
    serve_results_file(
        &req,
        &search_output_path(&config.results_dir),
        SEARCH_DOWNLOAD_NAME,
        "No results file found. Run a search first.",
    )
}

#[get("/download-synonyms")]
async fn download_synonyms(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, Error> {
    serve_results_file(
        &req,
        &synonym_output_path(&config.results_dir),
        SYNONYM_DOWNLOAD_NAME,
        "No synonym results found. Run a synonym search first.",
    )
}

fn serve_results_file(
    req: &HttpRequest,
    path: &Path,
    download_name: &str,
    missing_message: &'static str,
) -> Result<HttpResponse, Error> {
    if !path.exists() {
        return Err(error::ErrorNotFound(missing_message));
    }
    let file = NamedFile::open(path)?.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(download_name.to_owned())],
    });
    Ok(file
        .use_last_modified(true)
        .prefer_utf8(true)
        .into_response(req))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let words_path =
        std::env::var("WORDS_FILE_PATH").unwrap_or_else(|_| "data/unique_words.txt".into());
    let results_dir = std::env::var("RESULTS_DIR").unwrap_or_else(|_| "results".into());
    let translate_url = std::env::var("TRANSLATE_API_URL")
        .unwrap_or_else(|_| "http://localhost:5000/translate".into());

    let store = WordStore::load(Path::new(&words_path)).map_err(std::io::Error::other)?;
    info!(words = store.len(), path = %words_path, "word list loaded");

    let store = web::Data::new(store);
    let config = AppConfig {
        results_dir: PathBuf::from(results_dir),
    };

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .app_data(store.clone())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(HttpTranslator::new(translate_url.clone())))
            .service(index)
            .service(search_words)
            .service(synonyms)
            .service(download_results)
            .service(download_synonyms)
    })
    .bind(("0.0.0.0", 8000))?
    .run()
    .await
}
