#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use confkiosk::api::error::{ApiError, ApiErrorKind};
use confkiosk::api::{ConferenceApi, LoginData, LoginResponse, MealScanPayload, MealScanResponse};
use confkiosk::models::participant::{Category, Participant, RegistrationPayload};
use confkiosk::models::summary::DashboardSummary;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::thread;
use tiny_http::{Header, Response, Server, StatusCode};

/// Binary under test, with its own config home so the developer's real
/// `~/.confkiosk` is never touched.
pub fn kiosk(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("confkiosk");
    cmd.env("CONFKIOSK_HOME", setup_home(name))
        .env_remove("CONFKIOSK_API_URL")
        .env_remove("CONFKIOSK_LOG");
    cmd
}

pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_confkiosk_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Write a config under the test home whose conference starts today, with a
/// short confirmation delay so the station loop settles quickly.
pub fn write_station_config(name: &str, db_path: &str) {
    let today = chrono::Local::now().date_naive();
    let tomorrow = today.succ_opt().expect("tomorrow");
    let yaml = format!(
        "api_base_url: http://localhost:5173/api\n\
         database: {db_path}\n\
         conference_day_one: {today}\n\
         conference_day_two: {tomorrow}\n\
         claim_reset_delay_ms: 50\n"
    );
    let mut path = PathBuf::from(setup_home(name));
    path.push("confkiosk.conf");
    fs::write(path, yaml).expect("write station config");
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_confkiosk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn asha() -> Participant {
    Participant {
        id: "p-1".to_string(),
        name: "Asha".to_string(),
        email: "asha@example.org".to_string(),
        phone: Some("9876543210".to_string()),
        college: Some("IIT Madras".to_string()),
        category: Category::Attendee,
        qr_token: "QR-100".to_string(),
        created_at: None,
    }
}

pub fn claimed() -> MealScanResponse {
    MealScanResponse {
        success: true,
        message: "Meal claimed".to_string(),
        claim: None,
    }
}

pub fn already_claimed() -> MealScanResponse {
    MealScanResponse {
        success: false,
        message: "Already claimed".to_string(),
        claim: None,
    }
}

/// In-process backend: scripted answers, counted calls.
#[derive(Default)]
pub struct FakeApi {
    pub participants: Vec<Participant>,
    pub claim_answers: RefCell<VecDeque<Result<MealScanResponse, ApiError>>>,
    pub login_answer: RefCell<Option<Result<LoginResponse, ApiError>>>,
    pub lookups: Cell<usize>,
    pub claims: RefCell<Vec<MealScanPayload>>,
    pub registrations: Cell<usize>,
}

impl FakeApi {
    pub fn with(participants: Vec<Participant>) -> Self {
        Self {
            participants,
            ..Self::default()
        }
    }

    pub fn answer_claim(&self, answer: Result<MealScanResponse, ApiError>) {
        self.claim_answers.borrow_mut().push_back(answer);
    }

    pub fn answer_login(&self, token: &str, role: Option<&str>) {
        *self.login_answer.borrow_mut() = Some(Ok(LoginResponse {
            success: true,
            data: Some(LoginData {
                token: Some(token.to_string()),
                role: role.map(str::to_string),
            }),
            ..LoginResponse::default()
        }));
    }

    pub fn claim_count(&self) -> usize {
        self.claims.borrow().len()
    }
}

impl ConferenceApi for FakeApi {
    fn register(&self, payload: &RegistrationPayload) -> Result<Participant, ApiError> {
        self.registrations.set(self.registrations.get() + 1);
        Ok(Participant {
            id: "p-new".to_string(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: Some(payload.phone.clone()),
            college: Some(payload.college.clone()),
            category: payload.category,
            qr_token: "QR-NEW".to_string(),
            created_at: None,
        })
    }

    fn lookup(&self, qr_token: &str) -> Result<Participant, ApiError> {
        self.lookups.set(self.lookups.get() + 1);
        self.participants
            .iter()
            .find(|p| p.qr_token == qr_token)
            .cloned()
            .ok_or_else(|| ApiError::new(ApiErrorKind::NotFound, "Participant not found"))
    }

    fn claim_meal(&self, payload: &MealScanPayload) -> Result<MealScanResponse, ApiError> {
        self.claims.borrow_mut().push(payload.clone());
        self.claim_answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(claimed()))
    }

    fn summary(&self) -> Result<DashboardSummary, ApiError> {
        Ok(DashboardSummary::default())
    }

    fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.login_answer
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::new(ApiErrorKind::Unauthorized, "Invalid email or password")))
    }
}

/// One canned HTTP answer, chosen by request path prefix.
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: &'static str,
}

/// Fake backend on an ephemeral port. Serves `routes` until the test
/// process exits and returns the base URL.
pub fn stub_backend(routes: Vec<Route>) -> String {
    let server = Server::http("127.0.0.1:0").expect("stub backend");
    let base = format!("http://{}/api", server.server_addr());

    thread::spawn(move || {
        for req in server.incoming_requests() {
            let method = req.method().as_str().to_string();
            let url = req.url().to_string();

            let (status, body) = routes
                .iter()
                .find(|r| r.method == method && url.starts_with(r.path))
                .map(|r| (r.status, r.body))
                .unwrap_or((404, r#"{"message":"no such route"}"#));

            let response = Response::from_string(body)
                .with_status_code(StatusCode(status))
                .with_header(
                    Header::from_bytes("Content-Type", "application/json").expect("content type header"),
                );
            let _ = req.respond(response);
        }
    });

    base
}
