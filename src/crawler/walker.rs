//! Comment forest traversal
//!
//! The listing service returns comment trees with inconsistent shapes: a
//! comment's `replies` field is an empty string instead of an object when
//! there are none, deeply nested branches are sometimes truncated into stub
//! nodes without a `body`, and individual nodes can arrive with fields
//! missing entirely. The walker's job is to degrade every such node to one
//! error count and keep going; a single bad node never aborts the walk.

use crate::text::WordAggregator;
use serde_json::Value;

/// Visits every node of the forest depth-first, pre-order, recording each
/// node's body (or its absence) with the aggregator
///
/// Traversal uses an explicit stack rather than recursion so arbitrarily
/// deep threads cannot overflow the call stack. A malformed node is recorded
/// as an error and not descended into, since its replies cannot be located;
/// its siblings are still visited.
pub fn walk_comment_forest(nodes: &[Value], aggregator: &WordAggregator) {
    let mut stack: Vec<&Value> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match comment_body(node) {
            Some(body) => {
                aggregator.record(Some(body));
                if let Some(children) = reply_children(node) {
                    stack.extend(children.iter().rev());
                }
            }
            None => aggregator.record(None),
        }
    }
}

/// Extracts `data.body` when present as a string
fn comment_body(node: &Value) -> Option<&str> {
    node.get("data")
        .and_then(|data| data.get("body"))
        .and_then(Value::as_str)
}

/// Extracts the nested reply nodes, when any exist
///
/// `replies` holds a full listing object (`data.children`) when the comment
/// has replies and the empty string when it does not.
fn reply_children(node: &Value) -> Option<&Vec<Value>> {
    node.get("data")?
        .get("replies")?
        .get("data")?
        .get("children")?
        .as_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comment(body: &str, replies: Value) -> Value {
        json!({"kind": "t1", "data": {"body": body, "replies": replies}})
    }

    fn leaf(body: &str) -> Value {
        comment(body, json!(""))
    }

    fn listing(children: Vec<Value>) -> Value {
        json!({"kind": "Listing", "data": {"children": children}})
    }

    #[test]
    fn visits_nodes_preorder_with_nested_replies() {
        let forest = vec![
            comment("alpha", listing(vec![leaf("beta"), leaf("gamma")])),
            leaf("delta"),
        ];

        let aggregator = WordAggregator::new();
        walk_comment_forest(&forest, &aggregator);

        let (stats, tally) = aggregator.snapshot();
        assert_eq!(stats.total_comments, 4);
        assert_eq!(stats.total_errors, 0);
        // Discovery order proves the pre-order visit: alpha's replies before delta
        let order: Vec<&str> = tally.iter().map(|(word, _)| word).collect();
        assert_eq!(order, ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn malformed_node_counts_as_error_without_stopping_siblings() {
        let forest = vec![
            leaf("first"),
            json!({"kind": "more", "data": {"count": 12}}),
            leaf("third"),
        ];

        let aggregator = WordAggregator::new();
        walk_comment_forest(&forest, &aggregator);

        let (stats, tally) = aggregator.snapshot();
        assert_eq!(stats.total_comments, 3);
        assert_eq!(stats.total_errors, 1);
        assert_eq!(tally.get("first"), 1);
        assert_eq!(tally.get("third"), 1);
    }

    #[test]
    fn node_without_data_is_malformed() {
        let forest = vec![json!({"kind": "t1"})];

        let aggregator = WordAggregator::new();
        walk_comment_forest(&forest, &aggregator);

        let (stats, _) = aggregator.snapshot();
        assert_eq!(stats.total_comments, 1);
        assert_eq!(stats.total_errors, 1);
    }

    #[test]
    fn string_replies_field_means_no_children() {
        let aggregator = WordAggregator::new();
        walk_comment_forest(&[leaf("only")], &aggregator);

        let (stats, tally) = aggregator.snapshot();
        assert_eq!(stats.total_comments, 1);
        assert_eq!(tally.get("only"), 1);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        // Build a 50_000-deep reply chain bottom-up
        let mut node = leaf("deepest");
        for _ in 0..50_000 {
            node = comment("level", listing(vec![node]));
        }
        let forest = vec![node];

        let aggregator = WordAggregator::new();
        walk_comment_forest(&forest, &aggregator);

        let (stats, tally) = aggregator.snapshot();
        assert_eq!(stats.total_comments, 50_001);
        assert_eq!(tally.get("level"), 50_000);
        assert_eq!(tally.get("deepest"), 1);

        // Value's destructor recurses per nesting level and would overflow
        // the test thread's stack; leak the tree instead.
        std::mem::forget(forest);
    }
}
