use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const PUBLIC_KEY: &str = "test-public";
pub const SECRET_KEY: &str = "test-secret";

#[derive(Clone, Debug)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub descr: String,
    pub customdomain: String,
    pub indexpageid: String,
}

#[derive(Clone, Debug)]
pub struct Page {
    pub id: String,
    pub projectid: String,
    pub title: String,
    pub descr: String,
    pub alias: String,
    pub date: String,
    pub sort: String,
    pub published: String,
    pub filename: String,
    /// Body-only markup; the "full" endpoints wrap it in a document.
    pub html: String,
}

/// Keys the server accepts plus the content it serves. Read-only once built.
#[derive(Clone, Debug)]
pub struct Store {
    pub public_key: String,
    pub secret_key: String,
    pub projects: Vec<Project>,
    pub pages: Vec<Page>,
}

impl Default for Store {
    fn default() -> Self {
        let page = |id: &str, title: &str, sort: &str| Page {
            id: id.to_string(),
            projectid: "1".to_string(),
            title: title.to_string(),
            descr: String::new(),
            alias: String::new(),
            date: "2014-05-16 14:45:53".to_string(),
            sort: sort.to_string(),
            published: "1419702868".to_string(),
            filename: format!("page{id}.html"),
            html: format!("<div>{title}</div>"),
        };
        Self {
            public_key: PUBLIC_KEY.to_string(),
            secret_key: SECRET_KEY.to_string(),
            projects: vec![
                Project {
                    id: "0".to_string(),
                    title: "First Project".to_string(),
                    descr: "Some info".to_string(),
                    customdomain: String::new(),
                    indexpageid: "0".to_string(),
                },
                Project {
                    id: "1".to_string(),
                    title: "Second Project".to_string(),
                    descr: String::new(),
                    customdomain: "project.ru".to_string(),
                    indexpageid: "1001".to_string(),
                },
            ],
            pages: vec![
                page("1001", "Page title first", "80"),
                page("1002", "Page title second", "90"),
            ],
        }
    }
}

pub type Db = Arc<Store>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    Router::new()
        .route("/v1/{endpoint}/", get(dispatch))
        .with_state(Arc::new(store))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Store::default()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

fn found(result: Value) -> Reply {
    (StatusCode::OK, Json(json!({ "status": "FOUND", "result": result })))
}

fn error(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "status": "ERROR", "message": message })))
}

async fn dispatch(
    State(db): State<Db>,
    Path(endpoint): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    tracing::debug!(%endpoint, "request");

    if params.get("publickey") != Some(&db.public_key) {
        return error(StatusCode::OK, "Wrong public key");
    }
    if params.get("secretkey") != Some(&db.secret_key) {
        return error(StatusCode::OK, "Wrong secret key");
    }

    let reply = match endpoint.as_str() {
        "getprojectslist" => Ok(projects_list(&db)),
        "getprojectinfo" => project(&db, &params).map(project_info),
        "getpageslist" => project(&db, &params).map(|p| pages_list(&db, p)),
        "getpage" => page(&db, &params).map(|p| page_body(p, false, false)),
        "getpagefull" => page(&db, &params).map(|p| page_body(p, true, false)),
        "getpageexport" => page(&db, &params).map(|p| page_body(p, false, true)),
        "getpagefullexport" => page(&db, &params).map(|p| page_body(p, true, true)),
        _ => return error(StatusCode::NOT_FOUND, "Unknown method"),
    };
    match reply {
        Ok(result) => found(result),
        Err(message) => error(StatusCode::OK, message),
    }
}

fn project<'a>(db: &'a Store, params: &HashMap<String, String>) -> Result<&'a Project, &'static str> {
    let id = params.get("projectid").ok_or("Missing projectid")?;
    db.projects.iter().find(|p| &p.id == id).ok_or("Project not found")
}

fn page<'a>(db: &'a Store, params: &HashMap<String, String>) -> Result<&'a Page, &'static str> {
    let id = params.get("pageid").ok_or("Missing pageid")?;
    db.pages.iter().find(|p| &p.id == id).ok_or("Page not found")
}

fn projects_list(db: &Store) -> Value {
    db.projects
        .iter()
        .map(|p| json!({ "id": p.id, "title": p.title, "descr": p.descr }))
        .collect()
}

fn project_info(p: &Project) -> Value {
    json!({
        "id": p.id,
        "title": p.title,
        "descr": p.descr,
        "customdomain": p.customdomain,
        "export_csspath": "",
        "export_jspath": "",
        "export_imgpath": "",
        "indexpageid": p.indexpageid,
        "customcsstext": "y",
        "favicon": "",
        "page404id": "0",
        "images": [],
    })
}

fn page_summary(p: &Page) -> Value {
    json!({
        "id": p.id,
        "projectid": p.projectid,
        "title": p.title,
        "descr": p.descr,
        "img": "",
        "featureimg": "",
        "alias": p.alias,
        "date": p.date,
        "sort": p.sort,
        "published": p.published,
        "filename": p.filename,
    })
}

fn pages_list(db: &Store, project: &Project) -> Value {
    db.pages
        .iter()
        .filter(|p| p.projectid == project.id)
        .map(page_summary)
        .collect()
}

fn page_body(p: &Page, full: bool, export: bool) -> Value {
    let mut body = page_summary(p);
    let html = if full {
        format!("<!DOCTYPE html><html><head><title>{}</title></head><body>{}</body></html>", p.title, p.html)
    } else {
        p.html.clone()
    };
    body["html"] = Value::String(html);
    if export {
        body["images"] = json!([]);
    } else {
        body["js"] = json!([]);
        body["css"] = json!([]);
    }
    body
}
