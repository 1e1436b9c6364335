//! Session state container.
//!
//! The browser UI used to scatter its state across ad-hoc flags; here it is
//! an explicit container with named fields and one transition method per
//! user action. Two request lanes exist, mirroring the UI controls: one for
//! ideation-or-trend discovery, one for detail generation. Each lane allows
//! at most one in-flight request and carries a generation counter so a
//! late-arriving completion for a superseded request is discarded instead of
//! overwriting fresher state.
//!
//! The lock is never held across an await; callers take a token at dispatch
//! time and hand it back with the result.

use std::sync::Mutex;

use serde::Serialize;

use tubespark_models::{TrendingTopic, VideoFormat, VideoIdea};

/// Opaque token identifying one dispatched request within a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct SessionInner {
    topic: String,
    format: VideoFormat,
    ideas: Vec<VideoIdea>,
    trends: Vec<TrendingTopic>,
    active_trend: Option<TrendingTopic>,
    ideas_loading: bool,
    trends_loading: bool,
    detail_loading: bool,
    error: Option<String>,
    /// Generation counter for the ideation-or-trend lane
    discovery_seq: u64,
    /// Generation counter for the detail lane
    detail_seq: u64,
}

/// Serializable view of the session, returned by `GET /api/session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub topic: String,
    pub format: VideoFormat,
    pub ideas: Vec<VideoIdea>,
    pub trends: Vec<TrendingTopic>,
    pub active_trend: Option<TrendingTopic>,
    pub ideas_loading: bool,
    pub trends_loading: bool,
    pub detail_loading: bool,
    pub error: Option<String>,
}

/// The single per-server UI session.
#[derive(Debug, Default)]
pub struct Session {
    inner: Mutex<SessionInner>,
}

impl Session {
    /// Start an ideation request: clears previous results, records the topic,
    /// format, and optional trend hint, and raises the loading flag.
    pub fn begin_ideation(
        &self,
        topic: &str,
        format: VideoFormat,
        trend: Option<TrendingTopic>,
    ) -> RequestToken {
        let mut inner = self.lock();
        inner.discovery_seq += 1;
        inner.topic = topic.to_string();
        inner.format = format;
        inner.ideas.clear();
        inner.trends.clear();
        inner.active_trend = trend;
        inner.ideas_loading = true;
        inner.trends_loading = false;
        inner.error = None;
        RequestToken(inner.discovery_seq)
    }

    /// Settle an ideation request. Returns false when the token is stale
    /// (a newer discovery request has begun) and the result was discarded.
    pub fn complete_ideation(
        &self,
        token: RequestToken,
        result: Result<Vec<VideoIdea>, String>,
    ) -> bool {
        let mut inner = self.lock();
        if token.0 != inner.discovery_seq {
            return false;
        }
        inner.ideas_loading = false;
        match result {
            Ok(ideas) => inner.ideas = ideas,
            Err(message) => inner.error = Some(message),
        }
        true
    }

    /// Start a trend-discovery request. Shares the lane (and its generation
    /// counter) with ideation: starting either supersedes the other.
    pub fn begin_trends(&self, topic: &str) -> RequestToken {
        let mut inner = self.lock();
        inner.discovery_seq += 1;
        inner.topic = topic.to_string();
        inner.ideas.clear();
        inner.trends.clear();
        inner.active_trend = None;
        inner.trends_loading = true;
        inner.ideas_loading = false;
        inner.error = None;
        RequestToken(inner.discovery_seq)
    }

    /// Settle a trend-discovery request. Returns false when stale.
    pub fn complete_trends(
        &self,
        token: RequestToken,
        result: Result<Vec<TrendingTopic>, String>,
    ) -> bool {
        let mut inner = self.lock();
        if token.0 != inner.discovery_seq {
            return false;
        }
        inner.trends_loading = false;
        match result {
            Ok(trends) => inner.trends = trends,
            Err(message) => inner.error = Some(message),
        }
        true
    }

    /// Start a detail-generation request (script, titles, thumbnails,
    /// hashtags). Independent of the discovery lane.
    pub fn begin_detail(&self) -> RequestToken {
        let mut inner = self.lock();
        inner.detail_seq += 1;
        inner.detail_loading = true;
        RequestToken(inner.detail_seq)
    }

    /// Settle a detail-generation request. The loading flag is cleared
    /// whether the call succeeded or fell back; returns false when stale.
    pub fn complete_detail(&self, token: RequestToken) -> bool {
        let mut inner = self.lock();
        if token.0 != inner.detail_seq {
            return false;
        }
        inner.detail_loading = false;
        true
    }

    /// Current state of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        SessionSnapshot {
            topic: inner.topic.clone(),
            format: inner.format,
            ideas: inner.ideas.clone(),
            trends: inner.trends.clone(),
            active_trend: inner.active_trend.clone(),
            ideas_loading: inner.ideas_loading,
            trends_loading: inner.trends_loading,
            detail_loading: inner.detail_loading,
            error: inner.error.clone(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        // A poisoned lock means a panic mid-transition; the state is plain
        // data, so continuing with it is safe.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(title: &str) -> VideoIdea {
        VideoIdea::new(title, "description", VideoFormat::LongForm)
    }

    #[test]
    fn test_ideation_success_populates_ideas_and_clears_loading() {
        let session = Session::default();
        let token = session.begin_ideation("cooking", VideoFormat::LongForm, None);
        assert!(session.snapshot().ideas_loading);

        assert!(session.complete_ideation(token, Ok(vec![idea("A"), idea("B")])));

        let snapshot = session.snapshot();
        assert!(!snapshot.ideas_loading);
        assert_eq!(snapshot.ideas.len(), 2);
        assert_eq!(snapshot.topic, "cooking");
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_ideation_failure_sets_error_and_clears_loading() {
        let session = Session::default();
        let token = session.begin_ideation("cooking", VideoFormat::Shorts, None);

        assert!(session.complete_ideation(token, Err("failed to generate ideas".to_string())));

        let snapshot = session.snapshot();
        assert!(!snapshot.ideas_loading);
        assert!(snapshot.ideas.is_empty());
        assert_eq!(snapshot.error.as_deref(), Some("failed to generate ideas"));
    }

    #[test]
    fn test_stale_ideation_completion_is_discarded() {
        let session = Session::default();
        let stale = session.begin_ideation("first topic", VideoFormat::LongForm, None);
        let fresh = session.begin_ideation("second topic", VideoFormat::LongForm, None);

        // The late response for the superseded request must not overwrite
        // state belonging to the newer one.
        assert!(!session.complete_ideation(stale, Ok(vec![idea("stale")])));
        let snapshot = session.snapshot();
        assert!(snapshot.ideas.is_empty());
        assert!(snapshot.ideas_loading);
        assert_eq!(snapshot.topic, "second topic");

        assert!(session.complete_ideation(fresh, Ok(vec![idea("fresh")])));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.ideas[0].title, "fresh");
        assert!(!snapshot.ideas_loading);
    }

    #[test]
    fn test_trends_share_the_discovery_lane_with_ideation() {
        let session = Session::default();
        let ideation = session.begin_ideation("topic", VideoFormat::LongForm, None);
        let trends = session.begin_trends("topic");

        // The trend request superseded the ideation request.
        assert!(!session.complete_ideation(ideation, Ok(vec![idea("late")])));
        assert!(session.complete_trends(
            trends,
            Ok(vec![TrendingTopic::new("Trend", "Summary.")])
        ));

        let snapshot = session.snapshot();
        assert!(snapshot.ideas.is_empty());
        assert_eq!(snapshot.trends.len(), 1);
    }

    #[test]
    fn test_begin_trends_resets_previous_results() {
        let session = Session::default();
        let token = session.begin_ideation(
            "topic",
            VideoFormat::LongForm,
            Some(TrendingTopic::new("Hint", "Hint summary.")),
        );
        session.complete_ideation(token, Ok(vec![idea("A")]));

        session.begin_trends("another topic");
        let snapshot = session.snapshot();
        assert!(snapshot.ideas.is_empty());
        assert!(snapshot.active_trend.is_none());
        assert!(snapshot.trends_loading);
    }

    #[test]
    fn test_detail_lane_is_independent_of_discovery() {
        let session = Session::default();
        let ideation = session.begin_ideation("topic", VideoFormat::LongForm, None);
        let detail = session.begin_detail();

        assert!(session.snapshot().detail_loading);
        assert!(session.complete_detail(detail));
        assert!(!session.snapshot().detail_loading);

        // Discovery lane unaffected by detail completions.
        assert!(session.complete_ideation(ideation, Ok(vec![idea("A")])));
        assert_eq!(session.snapshot().ideas.len(), 1);
    }

    #[test]
    fn test_stale_detail_completion_keeps_newer_flag() {
        let session = Session::default();
        let stale = session.begin_detail();
        let fresh = session.begin_detail();

        assert!(!session.complete_detail(stale));
        assert!(session.snapshot().detail_loading);

        assert!(session.complete_detail(fresh));
        assert!(!session.snapshot().detail_loading);
    }
}
