use super::CommentCommandService;
use crate::{
    application::{
        commands::capability::ensure_can_modify,
        dto::{AuthenticatedUser, CommentDto, NestedCommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentBody,
};

pub struct UpdateCommentCommand {
    pub slug: String,
    pub body: String,
}

pub struct UpdateReplyCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let comment = self.load_comment(&command.slug).await?;
        ensure_can_modify(actor, "comments", "update", comment.user_id)?;

        let body = CommentBody::new(command.body)?;
        let updated = self.comment_repo.update_body(comment.id, body).await?;
        let view = self
            .comment_repo
            .find_view(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(CommentDto::from_view(view, self.storage.as_ref()))
    }

    pub async fn update_reply(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateReplyCommand,
    ) -> ApplicationResult<NestedCommentDto> {
        let reply = self.load_reply(&command.slug).await?;
        ensure_can_modify(actor, "comments", "update", reply.user_id)?;

        let body = CommentBody::new(command.body)?;
        let updated = self.reply_repo.update_body(reply.id, body).await?;
        let view = self
            .reply_repo
            .find_view(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("reply not found"))?;
        Ok(NestedCommentDto::from_view(view, self.storage.as_ref()))
    }
}
