mod basic_sentiment_analysis;
mod failure_isolation;
