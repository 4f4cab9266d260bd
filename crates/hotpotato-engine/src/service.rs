//! The `Service` trait: what front-ends call.
//!
//! One method per user-facing command. [`GameMaster`](crate::GameMaster)
//! is the real implementation; front-ends can be tested against a fake.

use std::future::Future;

use hotpotato_protocol::{
    CookRequest, CookResponse, GetHolderRequest, GetHolderResponse,
    GetLeaderboardRequest, GetLeaderboardResponse, StealRequest, StealResponse,
    TossRequest, TossResponse,
};

use crate::EngineError;

/// The Hot Potato game operations.
pub trait Service: Send + Sync + 'static {
    /// Passes the potato from the actor to the target, starting a new
    /// game if the channel has none.
    ///
    /// # Errors
    /// - [`EngineError::NotHolder`] if the actor isn't holding it
    fn toss(
        &self,
        req: &TossRequest,
    ) -> impl Future<Output = Result<TossResponse, EngineError>> + Send;

    /// Takes the potato from the target. The thief takes any explosion.
    ///
    /// # Errors
    /// - [`EngineError::NoOngoingGame`]
    /// - [`EngineError::SelfSteal`] if actor and target are the same
    /// - [`EngineError::NotHolder`] if the target isn't holding it
    fn steal(
        &self,
        req: &StealRequest,
    ) -> impl Future<Output = Result<StealResponse, EngineError>> + Send;

    /// Raises the heat by one and keeps the potato for another turn.
    ///
    /// # Errors
    /// - [`EngineError::NoOngoingGame`]
    /// - [`EngineError::NotHolder`] if the actor isn't holding it
    fn cook(
        &self,
        req: &CookRequest,
    ) -> impl Future<Output = Result<CookResponse, EngineError>> + Send;

    /// Reports who holds the potato. Read-only.
    ///
    /// # Errors
    /// - [`EngineError::NoOngoingGame`]
    fn get_holder(
        &self,
        req: &GetHolderRequest,
    ) -> impl Future<Output = Result<GetHolderResponse, EngineError>> + Send;

    /// Returns the room's death ranking. Read-only.
    fn get_leaderboard(
        &self,
        req: &GetLeaderboardRequest,
    ) -> impl Future<Output = Result<GetLeaderboardResponse, EngineError>> + Send;
}
