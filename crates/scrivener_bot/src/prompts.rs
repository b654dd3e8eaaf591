//! Prompt templates sent to the language model.

/// Prompt for a new post in `community`.
pub fn post_prompt(community: &str) -> String {
    format!(
        "Generate an engaging Reddit post relevant to the r/{community} community. \
         The content should be fun, interesting, or relatable, and sound natural and \
         human-written without indicating it's AI-generated. Do not include a title or \
         anything that would suggest this was AI-generated."
    )
}

/// Prompt for a reply to a post, given its title-plus-excerpt context.
pub fn comment_prompt(context: &str) -> String {
    format!(
        "Generate a thoughtful and engaging brief comment with an unexpected but realistic \
         answer for the following post. Keep the comment relevant to the content, and make \
         it appear as if it was written by a human. \nPost: {context}\nYour comment:"
    )
}
