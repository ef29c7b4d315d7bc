use std::sync::Arc;

use hyper::header;
use hyper::{Body, Request, Response, StatusCode};
use routerify::prelude::RequestExt as _;
use routerify::Router;
use serde_json::json;

use super::super::error::{OptionExt, Result, ResultExt, RouteError};
use super::super::ext::RequestExt as _;
use super::super::macros::make_response;
use crate::database::{Choice, Question};
use crate::global::GlobalState;

const NO_POLLS_MESSAGE: &str = "No polls are available.";
const MISSING_CHOICE_MESSAGE: &str = "Missing 'choice' param in form data";
const INVALID_CHOICE_MESSAGE: &str = "Invalid choice";

fn question_id(req: &Request<Body>) -> Result<i64> {
    req.param("id")
        .expect("router did not provide id param")
        .parse()
        .map_ignore_err_route((StatusCode::NOT_FOUND, "poll not found"))
}

async fn get_question(db: &sqlx::PgPool, id: i64) -> Result<Question> {
    sqlx::query_as::<_, Question>("SELECT id, question_text, pub_date FROM questions WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch poll"))?
        .map_err_route((StatusCode::NOT_FOUND, "poll not found"))
}

async fn get_choices(db: &sqlx::PgPool, question_id: i64) -> Result<Vec<Choice>> {
    sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text, votes FROM choices WHERE question_id = $1 ORDER BY id",
    )
    .bind(question_id)
    .fetch_all(db)
    .await
    .map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch choices"))
}

fn detail_body(
    question: &Question,
    choices: &[Choice],
    error_message: Option<&str>,
) -> serde_json::Value {
    // The detail view is for voting, tallies are only exposed by the results
    // view
    let choices = choices
        .iter()
        .map(|choice| json!({ "id": choice.id, "choice_text": choice.choice_text }))
        .collect::<Vec<_>>();

    match error_message {
        Some(message) => json!({
            "question": question,
            "choices": choices,
            "error_message": message,
        }),
        None => json!({
            "question": question,
            "choices": choices,
        }),
    }
}

/// Returns up to 5 published questions, most recent first. Questions with a
/// publication date in the future are not listed.
async fn index(req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;

    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM questions WHERE pub_date <= NOW() ORDER BY pub_date DESC LIMIT 5",
    )
    .fetch_all(&global.db)
    .await
    .map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch polls"))?;

    let body = if questions.is_empty() {
        json!({ "questions": questions, "message": NO_POLLS_MESSAGE })
    } else {
        json!({ "questions": questions })
    };

    Ok(make_response!(StatusCode::OK, body))
}

async fn detail(req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;
    let id = question_id(&req)?;

    let question = get_question(&global.db, id).await?;
    let choices = get_choices(&global.db, id).await?;

    Ok(make_response!(
        StatusCode::OK,
        detail_body(&question, &choices, None)
    ))
}

async fn results(req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;
    let id = question_id(&req)?;

    let question = get_question(&global.db, id).await?;
    let choices = get_choices(&global.db, id).await?;

    Ok(make_response!(
        StatusCode::OK,
        json!({ "question": question, "choices": choices })
    ))
}

/// Records a vote for one of the question's choices and redirects to the
/// results view.
///
/// The increment is a single atomic UPDATE, so concurrent votes on the same
/// choice cannot lose updates. Double-submitting a form still counts twice,
/// there is no idempotency key.
async fn vote(mut req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;
    let id = question_id(&req)?;

    let question = get_question(&global.db, id).await?;

    let body = hyper::body::to_bytes(req.body_mut())
        .await
        .map_err_route((StatusCode::BAD_REQUEST, "failed to read request body"))?;

    let choice = url::form_urlencoded::parse(&body)
        .find_map(|(key, value)| (key == "choice").then(|| value.into_owned()));

    let Some(choice) = choice else {
        let choices = get_choices(&global.db, id).await?;
        return Ok(make_response!(
            StatusCode::OK,
            detail_body(&question, &choices, Some(MISSING_CHOICE_MESSAGE))
        ));
    };

    // A choice id that does not parse cannot belong to this question, so it
    // falls through to the invalid choice response below.
    let updated = match choice.parse::<i64>() {
        Ok(choice_id) => sqlx::query(
            "UPDATE choices SET votes = votes + 1 WHERE id = $1 AND question_id = $2",
        )
        .bind(choice_id)
        .bind(question.id)
        .execute(&global.db)
        .await
        .map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "failed to record vote"))?
        .rows_affected(),
        Err(_) => 0,
    };

    if updated == 0 {
        let choices = get_choices(&global.db, id).await?;
        return Ok(make_response!(
            StatusCode::OK,
            detail_body(&question, &choices, Some(INVALID_CHOICE_MESSAGE))
        ));
    }

    tracing::debug!(choice = %choice, question_id = question.id, "vote recorded");

    Ok(Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(
            header::LOCATION,
            format!("/v1/polls/{}/results", question.id),
        )
        .body(Body::empty())
        .expect("failed to build redirect response"))
}

pub fn routes(_global: &Arc<GlobalState>) -> Router<Body, RouteError> {
    Router::builder()
        .get("/", index)
        .get("/:id", detail)
        .get("/:id/results", results)
        .post("/:id/vote", vote)
        .build()
        .expect("failed to build router")
}
