//! Request-scoped cancellation and deadlines.
//!
//! A [`Context`] travels with a single operation. It may be canceled
//! explicitly, or it may carry a deadline after which it is considered done.
//! Derived contexts inherit both from their parent, so canceling a parent
//! aborts every operation started with one of its descendants.
pub use tokio_util::sync::CancellationToken;
use {
    pin_project::pin_project,
    std::{
        future::Future,
        pin::Pin,
        task::{self, Poll},
        time::Duration,
    },
    tokio::time::{Instant, Sleep},
    tokio_util::sync::WaitForCancellationFutureOwned,
};

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Context canceled")]
    Canceled,

    #[error("Context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Context that is never canceled and has no deadline.
    pub fn background() -> Self {
        Default::default()
    }

    /// Returns a derived context that can be canceled on its own. Canceling
    /// the derived context leaves the parent untouched.
    pub fn with_cancel(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Returns a derived context which expires after `timeout`, or at the
    /// parent's deadline if that comes first.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a derived context which expires at `deadline`, or at the
    /// parent's deadline if that comes first.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_canceled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Reason the context is done, if it is. Cancellation takes precedence
    /// over an expired deadline.
    pub fn err(&self) -> Option<Error> {
        if self.is_canceled() {
            Some(Error::Canceled)
        } else if matches!(self.deadline, Some(deadline) if deadline <= Instant::now()) {
            Some(Error::DeadlineExceeded)
        } else {
            None
        }
    }
}

impl From<CancellationToken> for Context {
    fn from(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }
}

#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct ContextFuture<T> {
    #[pin]
    cancellation: WaitForCancellationFutureOwned,
    #[pin]
    deadline: Option<Sleep>,
    #[pin]
    fut: T,
}

impl<T> Future for ContextFuture<T>
where
    T: Future,
{
    type Output = Result<T::Output, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if this.cancellation.poll(cx).is_ready() {
            return Poll::Ready(Err(Error::Canceled));
        }

        if let Some(deadline) = this.deadline.as_pin_mut() {
            if deadline.poll(cx).is_ready() {
                return Poll::Ready(Err(Error::DeadlineExceeded));
            }
        }

        this.fut.poll(cx).map(Ok)
    }
}

pub trait FutureExt {
    type Future: Future;

    /// Consumes the future, returning a new future that is aborted once the
    /// provided [`Context`] is canceled or its deadline expires. The inner
    /// future is dropped without being polled again.
    ///
    /// Must be called from within a `tokio` runtime when the context carries
    /// a deadline.
    ///
    /// # Example
    ///
    /// ```rust
    /// use {
    ///     context::{Context, Error, FutureExt},
    ///     std::time::Duration,
    /// };
    ///
    /// # async fn example() {
    /// let ctx = Context::background().with_timeout(Duration::from_millis(100));
    ///
    /// let answer = async {
    ///     tokio::time::sleep(Duration::from_millis(500)).await;
    ///     42
    /// }
    /// .with_context(ctx);
    ///
    /// assert_eq!(answer.await, Err(Error::DeadlineExceeded));
    /// # }
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// #     example().await;
    /// # }
    /// ```
    fn with_context(self, ctx: Context) -> ContextFuture<Self::Future>;
}

impl<T> FutureExt for T
where
    T: Future,
{
    type Future = T;

    fn with_context(self, ctx: Context) -> ContextFuture<Self::Future> {
        ContextFuture {
            cancellation: ctx.token.cancelled_owned(),
            deadline: ctx.deadline.map(tokio::time::sleep_until),
            fut: self,
        }
    }
}
