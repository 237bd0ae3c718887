use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use super::typewriter::{script, Frame, Typewriter, TypewriterConfig};

/// Upper bound on a script; one pass over the default tips is well under it.
const MAX_FRAMES: usize = 10_000;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScriptQuery {
    pub reduced_motion: bool,
    pub looping: bool,
}

impl Default for ScriptQuery {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            looping: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoaderScript {
    /// When true the client replays `frames` from the start after the last one.
    pub looping: bool,
    pub frames: Vec<Frame>,
}

/// GET /api/v1/loader/script?reduced_motion=&looping=
///
/// Timed frames of the loading-screen typewriter over the default tips.
pub async fn handle_loader_script(Query(query): Query<ScriptQuery>) -> Json<LoaderScript> {
    let config = TypewriterConfig {
        looping: query.looping,
        reduced_motion: query.reduced_motion,
        ..TypewriterConfig::default()
    };
    let mut machine = Typewriter::with_default_tips(config);
    Json(LoaderScript {
        looping: query.looping,
        frames: script(&mut machine, MAX_FRAMES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::typewriter::DEFAULT_TIPS;

    #[tokio::test]
    async fn test_default_script_types_every_tip() {
        let Json(out) = handle_loader_script(Query(ScriptQuery::default())).await;
        assert!(out.looping);
        assert_eq!(out.frames[0].text, "");
        assert!(out.frames.len() < MAX_FRAMES);
        for tip in DEFAULT_TIPS {
            assert!(out.frames.iter().any(|f| f.text == tip), "{tip}");
        }
    }

    #[tokio::test]
    async fn test_reduced_motion_script_shows_whole_tips() {
        let Json(out) = handle_loader_script(Query(ScriptQuery {
            reduced_motion: true,
            looping: true,
        }))
        .await;
        assert_eq!(out.frames.len(), DEFAULT_TIPS.len());
        for frame in &out.frames {
            assert_eq!(frame.text, DEFAULT_TIPS[frame.tip]);
        }
    }
}
