//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! table call degrades to an on-page error without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{Factor, NewFactor, NewProblem, Problem};
use uuid::Uuid;

#[cfg(any(test, feature = "hydrate"))]
fn delete_problem_endpoint(problem_id: Uuid) -> String {
    format!("/api/problems/{problem_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch every problem row from `GET /api/problems`, oldest first.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_problems() -> Result<Vec<Problem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/problems")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("fetch problems", resp.status()));
        }
        resp.json::<Vec<Problem>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Insert a problem row via `POST /api/problems`.
///
/// The created row is not returned; callers refetch the list instead.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the payload.
pub async fn create_problem(new: &NewProblem) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/problems")
            .json(new)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create problem", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new;
        Err("not available on server".to_owned())
    }
}

/// Delete a problem row and its factors via `DELETE /api/problems/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or either table delete
/// fails on the server.
pub async fn delete_problem(problem_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = delete_problem_endpoint(problem_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete problem", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = problem_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch every factor row from `GET /api/factors`, oldest first.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_factors() -> Result<Vec<Factor>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/factors")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("fetch factors", resp.status()));
        }
        resp.json::<Vec<Factor>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Insert a factor row via `POST /api/factors`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the payload.
pub async fn create_factor(new: &NewFactor) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/factors")
            .json(new)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create factor", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new;
        Err("not available on server".to_owned())
    }
}
