//! End-to-end pipeline tests: feed bodies in, comparison report out.

use brewsight::assembler::DatasetAssembler;
use brewsight::config::{AppConfig, FeedUrls, FetchConfig};
use brewsight::fetch::{HttpResponse, Transport};
use brewsight::participant_report;
use brewsight::personalize::{participant_status, personalize};
use brewsight::stats::ProfileCategory;
use brewsight::Result;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Serves canned bodies in order; errors once exhausted.
struct CannedTransport {
    bodies: Mutex<VecDeque<&'static str>>,
}

impl CannedTransport {
    fn new(bodies: Vec<&'static str>) -> Self {
        Self {
            bodies: Mutex::new(bodies.into()),
        }
    }
}

impl Transport for CannedTransport {
    async fn get(&self, _url: &str, _headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let body = self.bodies.lock().unwrap().pop_front();
        match body {
            Some(body) => Ok(HttpResponse {
                status: 200,
                body: body.to_string(),
            }),
            None => Err(brewsight::Error::Network("script exhausted".to_string())),
        }
    }

    async fn post_form(&self, _url: &str, _form: &[(String, String)]) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 302,
            body: String::new(),
        })
    }
}

const TASTE_CSV: &str = "\
Timestamp,UUID,Which Coffee,Aroma,Flavor,Acidity,Body,Aftertaste,Tasting Notes,Overall Enjoyment\n\
6/2/2025,u1,A,3,3,Pleasant Acidity,Medium,3,\"Earthy, Chocolate\",3\n\
6/2/2025,u1,B,4.5,4.5,No acidity,Light,4.5,Floral,4.5\n\
6/2/2025,u2,A,2,2,Too Acidic,Heavy,2,Earthy,2\n\
6/2/2025,u2,B,3.5,3.5,Pleasant Acidity,Medium,3.5,Berry,3.5\n\
6/2/2025,u3,A,4,4,Pleasant Acidity,Medium,4,Earthy,4";

const PREF_CSV: &str = "\
Timestamp,UUID,Coffee Person,Coffees Per Day,Teas Per Day,Black Coffee,Coffee Types\n\
6/2/2025,u1,Coffee,2,0,Yes,Pour over\n\
6/2/2025,u2,Coffee,1,1,No,Espresso\n\
6/2/2025,u3,Tea,0,3,No,Pour over";

fn config() -> AppConfig {
    AppConfig {
        feeds: FeedUrls {
            taste_test: "https://example.com/taste.csv".into(),
            preference: "https://example.com/pref.csv".into(),
            coffee_metadata: "https://example.com/coffee.csv".into(),
            coffee_quality: "https://example.com/quality.csv".into(),
            participant_harshness: "https://example.com/harshness.csv".into(),
        },
        fetch: FetchConfig {
            request_timeout_ms: 100,
            max_retries: 0,
            retry_delay_ms: 1,
        },
        cache_ttl_hours: 24,
    }
}

#[tokio::test]
async fn full_pipeline_produces_a_personalized_report() {
    let transport = CannedTransport::new(vec![TASTE_CSV, PREF_CSV]);
    let assembler = DatasetAssembler::new(transport, config());

    let dataset = assembler.assemble(false).await.unwrap();
    assert_eq!(dataset.unique_coffees, vec!["A", "B"]);
    assert_eq!(dataset.data_quality.completion_rate, 1.0);

    let status = participant_status(&dataset, Some("u1"));
    assert!(status.can_view_personalized_results);

    let view = personalize(&dataset, Some("u1"));
    let preferences = view.coffee_preferences();
    assert_eq!(preferences.favorite_coffees, vec!["B"]);
    assert_eq!(preferences.least_favorite_coffees, vec!["A"]);

    let report = participant_report(&dataset, Some("u1"));
    let brewing = report.brewing_method.unwrap();
    // Pour over is 2 of 3 preference responses
    assert_eq!(brewing.agreement_percentage, Some(66.67));
    assert_eq!(brewing.rank, Some(1));

    let choices = report.coffee_preferences.unwrap();
    assert_eq!(choices.favorite.rank, Some(1));

    assert!(report.taste_test_performance.is_some());
    let notes = report.tasting_notes.unwrap();
    // "earthy" appears in 3 of 5 taste responses
    assert_eq!(notes.common_notes[0].note, "earthy");
}

#[tokio::test]
async fn anonymous_report_still_renders_a_balanced_profile() {
    let transport = CannedTransport::new(vec![TASTE_CSV, PREF_CSV]);
    let assembler = DatasetAssembler::new(transport, config());
    let dataset = assembler.assemble(false).await.unwrap();

    let report = participant_report(&dataset, None);
    assert!(report.brewing_method.is_none());
    assert!(report.coffee_preferences.is_none());
    assert_eq!(
        report.overall_profile.primary_category,
        ProfileCategory::BalancedTaster
    );
    assert_eq!(
        report.overall_profile.description,
        "You have well-balanced coffee preferences"
    );
}

#[tokio::test]
async fn fetch_failure_degrades_to_the_sample_dataset() {
    let transport = CannedTransport::new(vec![]);
    let assembler = DatasetAssembler::new(transport, config());

    let dataset = assembler.assemble(true).await.unwrap();
    assert_eq!(dataset.unique_coffees, vec!["D", "E", "F"]);

    // The sample dataset is coherent enough to report on
    let report = participant_report(&dataset, Some("q7oa8cg3vws"));
    assert!(report.taste_test_performance.is_some());
}
