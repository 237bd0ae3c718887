use axum::{extract::State, Json};
use serde::Deserialize;

use super::{improve, Improvable, Improved, Tone};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(bound(deserialize = "D: Improvable"))]
pub struct ImproveRequest<D: Improvable> {
    pub document: D,
    #[serde(flatten)]
    pub target: D::Target,
    #[serde(default)]
    pub tone: Tone,
}

/// POST /api/v1/{resume,cover-letter}/improve
pub async fn handle_improve<D: Improvable>(
    State(state): State<AppState>,
    Json(req): Json<ImproveRequest<D>>,
) -> Result<Json<Improved<D>>, AppError> {
    let generator = state.generator()?;
    let improved = improve(generator, &req.document, &req.target, req.tone).await?;
    Ok(Json(improved))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::TextGenerator;
    use crate::models::{CoverLetter, Resume};
    use crate::rewrite::{
        cover_letter::CoverTarget, resume::ResumeTarget, testing::StubGenerator,
    };
    use crate::state::test_state;
    use serde_json::json;

    #[test]
    fn test_request_flattens_target() {
        let req: ImproveRequest<Resume> = serde_json::from_value(json!({
            "document": {},
            "target": "project",
            "index": 1,
            "tone": "technical",
        }))
        .unwrap();
        assert_eq!(req.target, ResumeTarget::Project { index: 1 });
        assert_eq!(req.tone, Tone::Technical);
    }

    #[tokio::test]
    async fn test_missing_key_is_reported() {
        let req: ImproveRequest<CoverLetter> = serde_json::from_value(json!({
            "document": {},
            "target": "intro",
        }))
        .unwrap();
        let result = handle_improve(State(test_state(None)), Json(req)).await;
        assert!(matches!(result, Err(AppError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_improve_closing() {
        let generator = Arc::new(StubGenerator::replying("  Looking forward to it.  "));
        let state = test_state(Some(generator.clone() as Arc<dyn TextGenerator>));
        let req = ImproveRequest {
            document: CoverLetter::default(),
            target: CoverTarget::Closing,
            tone: Tone::Concise,
        };

        let Json(out) = handle_improve(State(state), Json(req)).await.unwrap();
        assert!(out.applied);
        assert_eq!(out.document.closing, "Looking forward to it.");
        assert!(generator.prompts.lock().unwrap()[0].starts_with("Rewrite the closing"));
    }
}
