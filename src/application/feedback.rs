//! Citizen feedback form flow: CAPTCHA gate in front of ticket creation.

use tracing::debug;

use crate::application::outcome::Mutation;
use crate::application::repos::NewTicket;
use crate::application::tickets::TicketBoard;
use crate::application::verification::CaptchaChallenge;
use crate::domain::entities::TicketRecord;

pub const VERIFICATION_REQUIRED: &str = "Completa la verificación de seguridad";

pub struct FeedbackForm<'a> {
    board: &'a mut TicketBoard,
    challenge: CaptchaChallenge,
}

impl<'a> FeedbackForm<'a> {
    pub fn new(board: &'a mut TicketBoard) -> Self {
        Self {
            board,
            challenge: CaptchaChallenge::new(),
        }
    }

    pub fn challenge(&self) -> &CaptchaChallenge {
        &self.challenge
    }

    pub fn verify(&mut self, input: &str) -> bool {
        self.challenge.verify(input)
    }

    pub fn refresh_challenge(&mut self) {
        self.challenge.refresh();
    }

    /// Without a passing verification the repository is never called and
    /// the submitter is asked to complete the check. After a successful
    /// submission the challenge resets so the form cannot be replayed.
    pub async fn submit(&mut self, draft: NewTicket) -> Mutation<TicketRecord> {
        if !self.challenge.is_verified() {
            debug!("feedback submission blocked: verification incomplete");
            return Mutation::failed(VERIFICATION_REQUIRED);
        }

        let outcome = self.board.submit(draft).await;
        if outcome.success {
            self.challenge.refresh();
        }
        outcome
    }
}
