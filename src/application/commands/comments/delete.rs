use super::CommentCommandService;
use crate::application::{
    commands::capability::ensure_can_modify, dto::AuthenticatedUser, error::ApplicationResult,
};

pub struct DeleteCommentCommand {
    pub slug: String,
}

pub struct DeleteReplyCommand {
    pub slug: String,
}

impl CommentCommandService {
    /// Replies go with their comment.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment = self.load_comment(&command.slug).await?;
        ensure_can_modify(actor, "comments", "delete", comment.user_id)?;
        self.comment_repo.delete(comment.id).await?;
        Ok(())
    }

    pub async fn delete_reply(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteReplyCommand,
    ) -> ApplicationResult<()> {
        let reply = self.load_reply(&command.slug).await?;
        ensure_can_modify(actor, "comments", "delete", reply.user_id)?;
        self.reply_repo.delete(reply.id).await?;
        Ok(())
    }
}
