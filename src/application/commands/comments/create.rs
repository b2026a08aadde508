use super::CommentCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CommentDto, NestedCommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentBody, NewComment, NewNestedComment},
        slug::Slug,
    },
};

pub struct CreateCommentCommand {
    pub article_slug: String,
    pub body: String,
}

pub struct CreateReplyCommand {
    pub comment_slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_capability(actor, "comments", "create")?;
        let body = CommentBody::new(command.body)?;

        // Unknown articles cannot accept comments.
        let article = match Slug::new(command.article_slug) {
            Ok(slug) => self.article_repo.find_by_slug(&slug).await?,
            Err(_) => None,
        }
        .ok_or_else(|| ApplicationError::not_acceptable("article does not exist"))?;

        let new_comment = NewComment {
            article_id: article.id,
            user_id: actor.id,
            body,
            slug: None,
            created_at: self.clock.now(),
        };
        let created = self
            .slug_service
            .assign_and_insert(new_comment, |comment| self.comment_repo.insert(comment))
            .await?;

        let view = self
            .comment_repo
            .find_view(created.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(CommentDto::from_view(view, self.storage.as_ref()))
    }

    pub async fn create_reply(
        &self,
        actor: &AuthenticatedUser,
        command: CreateReplyCommand,
    ) -> ApplicationResult<NestedCommentDto> {
        ensure_capability(actor, "comments", "create")?;
        let body = CommentBody::new(command.body)?;
        let parent = self.load_comment(&command.comment_slug).await?;

        let new_reply = NewNestedComment {
            parent_id: parent.id,
            user_id: actor.id,
            body,
            slug: None,
            created_at: self.clock.now(),
        };
        let created = self
            .slug_service
            .assign_and_insert(new_reply, |reply| self.reply_repo.insert(reply))
            .await?;

        let view = self
            .reply_repo
            .find_view(created.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("reply not found"))?;
        Ok(NestedCommentDto::from_view(view, self.storage.as_ref()))
    }
}
