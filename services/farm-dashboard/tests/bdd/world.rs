//! BDD test world for the farm dashboard

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;
use farm_dashboard::api::{CheckerEntry, FlagEntry};
use farm_dashboard::checkers::CheckerList;
use farm_dashboard::engine::Engine;
use farm_dashboard::io::{HttpClient, HttpResponse};
use farm_dashboard::pagination::Pagination;

#[derive(Debug, Default, World)]
pub struct DashboardWorld {
    // Pagination testing
    pub pagination: Pagination,
    pub last_move_accepted: Option<bool>,

    // Table testing
    pub flags: Vec<FlagEntry>,
    pub rendered: Option<String>,

    // Checker testing
    pub checker_list: CheckerList,

    // Sync testing
    pub farm: Option<Arc<ScriptedFarm>>,
    pub engine: Option<Arc<Engine>>,
}

/// Farm stand-in that records requests and answers from a script
#[derive(Debug, Default)]
pub struct ScriptedFarm {
    pub post_status: u16,
    pub requests: Mutex<Vec<String>>,
}

impl ScriptedFarm {
    pub fn new(post_status: u16) -> Self {
        Self {
            post_status,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedFarm {
    async fn get(&self, url: &str) -> farm_dashboard::Result<HttpResponse> {
        self.requests.lock().unwrap().push(format!("GET {}", url));
        Ok(HttpResponse {
            status: 200,
            body: "[]".to_string(),
        })
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> farm_dashboard::Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("POST {} {}", url, body));
        Ok(HttpResponse {
            status: self.post_status,
            body: "[]".to_string(),
        })
    }
}

/// Parse "service:port:delta" triples separated by commas
pub fn parse_checkers(list: &str) -> Vec<CheckerEntry> {
    list.split(',')
        .filter(|s| !s.is_empty())
        .map(|triple| {
            let mut parts = triple.splitn(3, ':');
            let service = parts.next().unwrap_or_default().to_string();
            let port = parts.next().and_then(|p| p.parse::<f64>().ok());
            let delta = parts.next().and_then(|d| d.parse::<f64>().ok());
            CheckerEntry {
                service: Some(service),
                port,
                delta,
            }
        })
        .collect()
}
