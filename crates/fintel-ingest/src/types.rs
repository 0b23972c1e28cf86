use serde::Deserialize;

/// One collection file as written by the upstream collector: a list of
/// tweets under a `tweets` key. Anything else in the document is ignored.
#[derive(Debug, Deserialize)]
pub struct CollectionFile {
    #[serde(default)]
    pub tweets: Vec<Tweet>,
}

/// A tweet as stored in a collection file. Every field is optional in
/// the wire format; missing fields collapse to empty strings so one
/// sparse tweet never fails the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user: TweetUser,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetUser {
    #[serde(default = "unknown_username")]
    pub username: String,
}

impl Default for TweetUser {
    fn default() -> Self {
        Self {
            username: unknown_username(),
        }
    }
}

fn unknown_username() -> String {
    "unknown".to_string()
}

/// A tweet tagged with the target whose collection run produced it.
/// `target` is always set by the loader before analysis sees the tweet.
#[derive(Debug, Clone)]
pub struct LoadedTweet {
    pub text: String,
    pub username: String,
    pub date: String,
    pub link: String,
    pub target: String,
}

impl LoadedTweet {
    pub(crate) fn from_tweet(tweet: Tweet, target: &str) -> Self {
        Self {
            text: tweet.text,
            username: tweet.user.username,
            date: tweet.date,
            link: tweet.link,
            target: target.to_string(),
        }
    }
}
