//! Cache-first behaviour of the weather service against a counting source.

use parking_lot::Mutex;
use showcase_shared::ManualClock;
use showcase_weather::{
    Condition, CurrentConditions, ForecastDay, ForecastSource, Location, LocationSuggestion,
    WeatherAlert, WeatherError, WeatherResult, WeatherService, WeatherSnapshot,
};
use std::sync::atomic::{AtomicUsize, Ordering};

const MINUTE_MS: u64 = 60_000;

#[derive(Default)]
struct CountingSource {
    current_calls: AtomicUsize,
    forecast_calls: Mutex<Vec<(String, u8)>>,
    search_calls: AtomicUsize,
    fail_search: bool,
}

fn snapshot(location: &str, days: u8) -> WeatherSnapshot {
    WeatherSnapshot {
        location: Location {
            name: location.to_string(),
            country: "France".to_string(),
            lat: 45.76,
            lon: 4.84,
        },
        current: CurrentConditions {
            temp_c: 18.0,
            temp_f: 64.4,
            condition: Condition {
                text: "Sunny".to_string(),
                icon: String::new(),
                code: 1000,
            },
            wind_kph: 9.0,
            wind_dir: "NW".to_string(),
            humidity: 55,
            feelslike_c: 18.0,
            feelslike_f: 64.4,
            uv: 4.0,
        },
        forecast: (0..days)
            .map(|d| ForecastDay {
                date: format!("2026-10-{:02}", 19 + u32::from(d)),
                maxtemp_c: 20.0,
                mintemp_c: 9.0,
                condition: Condition {
                    text: "Cloudy".to_string(),
                    icon: String::new(),
                    code: 1006,
                },
                daily_chance_of_rain: 10,
            })
            .collect(),
        alerts: if days > 0 {
            vec![WeatherAlert {
                headline: "Wind advisory".to_string(),
                severity: "Moderate".to_string(),
                urgency: "Expected".to_string(),
                areas: "Rhône".to_string(),
                description: String::new(),
                effective: String::new(),
                expires: String::new(),
            }]
        } else {
            Vec::new()
        },
    }
}

impl ForecastSource for CountingSource {
    fn fetch_current(&self, location: &str) -> WeatherResult<WeatherSnapshot> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        if location == "Atlantis" {
            return Err(WeatherError::NotFound {
                location: location.to_string(),
            });
        }
        Ok(snapshot(location, 0))
    }

    fn fetch_forecast(&self, location: &str, days: u8) -> WeatherResult<WeatherSnapshot> {
        self.forecast_calls.lock().push((location.to_string(), days));
        Ok(snapshot(location, days))
    }

    fn search_locations(&self, query: &str) -> WeatherResult<Vec<LocationSuggestion>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            return Err(WeatherError::Upstream("503 Service Unavailable".to_string()));
        }
        Ok(vec![LocationSuggestion {
            id: 1,
            name: format!("{query}ville"),
            region: String::new(),
            country: "France".to_string(),
            lat: 0.0,
            lon: 0.0,
        }])
    }
}

#[test]
fn test_current_is_cached_for_ten_minutes() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    let first = service.current("Lyon").expect("current");
    clock.advance(10 * MINUTE_MS);
    let second = service.current("Lyon").expect("current");
    assert_eq!(first, second);
    assert_eq!(source.current_calls.load(Ordering::SeqCst), 1);

    clock.advance(1);
    service.current("Lyon").expect("current");
    assert_eq!(source.current_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_locations_are_cached_independently() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    service.current("Lyon").expect("current");
    service.current("Paris").expect("current");
    service.current("Lyon").expect("current");
    assert_eq!(source.current_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failures_are_not_cached() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    for _ in 0..2 {
        assert_eq!(
            service.current("Atlantis"),
            Err(WeatherError::NotFound {
                location: "Atlantis".to_string()
            })
        );
    }
    assert_eq!(source.current_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_blank_location_is_rejected_without_fetching() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    assert!(matches!(
        service.current("   "),
        Err(WeatherError::InvalidQuery(_))
    ));
    assert!(matches!(
        service.forecast("", 3),
        Err(WeatherError::InvalidQuery(_))
    ));
    assert_eq!(source.current_calls.load(Ordering::SeqCst), 0);
    assert!(source.forecast_calls.lock().is_empty());
}

#[test]
fn test_forecast_days_are_clamped() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    assert_eq!(service.forecast("Lyon", 0).expect("forecast").forecast.len(), 1);
    assert_eq!(
        service.forecast("Lyon", 30).expect("forecast").forecast.len(),
        14
    );
    // Same clamped keys, served from cache.
    service.forecast("Lyon", 1).expect("forecast");
    service.forecast("Lyon", 14).expect("forecast");

    assert_eq!(
        *source.forecast_calls.lock(),
        vec![("Lyon".to_string(), 1), ("Lyon".to_string(), 14)]
    );
}

#[test]
fn test_forecast_lives_thirty_minutes() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    service.forecast("Lyon", 3).expect("forecast");
    clock.advance(30 * MINUTE_MS);
    service.forecast("Lyon", 3).expect("forecast");
    assert_eq!(source.forecast_calls.lock().len(), 1);

    clock.advance(1);
    service.forecast("Lyon", 3).expect("forecast");
    assert_eq!(source.forecast_calls.lock().len(), 2);
}

#[test]
fn test_alerts_share_the_one_day_forecast_entry() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    let alerts = service.alerts("Lyon").expect("alerts");
    assert!(alerts.has_alerts());
    service.forecast("Lyon", 1).expect("forecast");
    assert_eq!(*source.forecast_calls.lock(), vec![("Lyon".to_string(), 1)]);
}

#[test]
fn test_short_search_queries_return_nothing() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    assert!(service.search("").is_empty());
    assert!(service.search("L").is_empty());
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 0);

    let hits = service.search("Ly");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name(), "Lyville, France");
}

#[test]
fn test_search_is_cached_for_an_hour() {
    let clock = ManualClock::default();
    let source = CountingSource::default();
    let service = WeatherService::new(&source, &clock);

    service.search("Lyon");
    clock.advance(60 * MINUTE_MS);
    service.search("Lyon");
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 1);

    clock.advance(1);
    service.search("Lyon");
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_search_failure_degrades_to_empty() {
    let clock = ManualClock::default();
    let source = CountingSource {
        fail_search: true,
        ..CountingSource::default()
    };
    let service = WeatherService::new(&source, &clock);

    assert!(service.search("Lyon").is_empty());
    assert!(service.search("Lyon").is_empty());
    assert_eq!(
        source.search_calls.load(Ordering::SeqCst),
        2,
        "failed searches are retried"
    );
}
