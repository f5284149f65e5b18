use polix::{
    error::{BuildError, EvalError},
    eval_expression,
    interpreter::{builder::build_tree, evaluator::evaluate, lexer::tokenize},
    render::to_display_tree,
    tree::{Notation, TreeNode},
};

fn build_postfix(expression: &str) -> Result<TreeNode, BuildError> {
    build_tree(&tokenize(expression), Notation::Postfix)
}

fn assert_evaluates(expression: &str, notation: Notation, expected: i64) {
    match eval_expression(expression, notation) {
        Ok(value) => {
            assert_eq!(value, expected, "{expression} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{expression} failed: {e}"),
    }
}

/// Counts `(leaves, internal nodes)` through the public accessors only.
fn count_nodes(node: &TreeNode) -> (usize, usize) {
    if node.is_leaf() {
        return (1, 0);
    }

    let mut leaves = 0;
    let mut branches = 1;

    for child in [node.left(), node.right()].into_iter().flatten() {
        let (child_leaves, child_branches) = count_nodes(child);
        leaves += child_leaves;
        branches += child_branches;
    }

    (leaves, branches)
}

#[test]
fn postfix_worked_example() {
    assert_evaluates("23*5+", Notation::Postfix, 11);
}

#[test]
fn prefix_worked_example() {
    assert_evaluates("+*235", Notation::Prefix, 11);
}

#[test]
fn postfix_and_prefix_agree_on_commutative_expressions() {
    for (postfix, prefix) in [("23*5+", "+*235"), ("23+", "+23"), ("234**", "**234"), ("99*", "*99")] {
        let from_postfix = eval_expression(postfix, Notation::Postfix).unwrap();
        let from_prefix = eval_expression(prefix, Notation::Prefix).unwrap();

        assert_eq!(from_postfix, from_prefix, "{postfix} and {prefix} disagree");
    }
}

#[test]
fn operand_count_determines_leaf_and_branch_counts() {
    // n operands and n - 1 operators always yield n leaves and n - 1
    // internal nodes
    for (expression, operands) in [("7", 1), ("23+", 2), ("23*5+", 3), ("123*+4-", 4)] {
        let root = build_postfix(expression).unwrap();
        let (leaves, branches) = count_nodes(&root);

        assert_eq!(leaves, operands, "leaf count for {expression}");
        assert_eq!(branches, operands - 1, "branch count for {expression}");
    }
}

#[test]
fn too_few_operands_is_a_structure_error() {
    assert_eq!(build_postfix("2+"), Err(BuildError::InvalidStructure));
}

#[test]
fn leftover_operands_is_a_structure_error() {
    assert_eq!(build_postfix("23"), Err(BuildError::InvalidStructure));
}

#[test]
fn empty_input_is_a_structure_error() {
    assert_eq!(build_postfix(""), Err(BuildError::InvalidStructure));
    assert_eq!(build_tree(&[], Notation::Prefix), Err(BuildError::InvalidStructure));
}

#[test]
fn division_by_zero_is_reported() {
    let root = build_postfix("50/").unwrap();

    assert_eq!(evaluate(Some(&root)), Err(EvalError::DivisionByZero));
}

#[test]
fn division_rounds_toward_negative_infinity() {
    assert_evaluates("73/", Notation::Postfix, 2);
    // (0 - 5) / 3: truncation would give -1
    assert_evaluates("05-3/", Notation::Postfix, -2);
    // (0 - 9) / 2: truncation would give -4
    assert_evaluates("09-2/", Notation::Postfix, -5);
}

#[test]
fn non_numeric_leaf_is_reported() {
    let root = build_postfix("2a+").unwrap();

    assert_eq!(evaluate(Some(&root)), Err(EvalError::NonNumericLeaf));
}

#[test]
fn unknown_operator_symbol_is_reported_at_evaluation_time() {
    // `?` is not alphanumeric, so it builds an internal node just fine and
    // only fails once the evaluator reaches it
    let root = build_postfix("23?").unwrap();

    assert_eq!(evaluate(Some(&root)), Err(EvalError::UnsupportedOperator));
}

#[test]
fn absent_root_evaluates_to_zero() {
    assert_eq!(evaluate(None), Ok(0));
}

#[test]
fn single_operand_evaluates_to_itself() {
    assert_evaluates("7", Notation::Postfix, 7);
    assert_evaluates("0", Notation::Prefix, 0);
}

#[test]
fn prefix_builds_the_mirrored_tree() {
    let root = build_tree(&tokenize("+*235"), Notation::Prefix).unwrap();

    assert_eq!(root.value(), '+');
    assert_eq!(root.left().map(TreeNode::value), Some('5'));

    let product = root.right().unwrap();
    assert_eq!(product.value(), '*');
    assert_eq!(product.left().map(TreeNode::value), Some('3'));
    assert_eq!(product.right().map(TreeNode::value), Some('2'));
}

#[test]
fn deep_multiplication_overflows() {
    // 9^20 exceeds i64::MAX, 9^19 does not
    let expression = format!("9{}", "9*".repeat(19));
    let root = build_postfix(&expression).unwrap();

    assert_eq!(evaluate(Some(&root)), Err(EvalError::Overflow));
}

#[test]
fn rendered_tree_starts_at_the_root_and_shows_every_token() {
    let root = build_postfix("23*5+").unwrap();
    let rendered = to_display_tree(&root).to_string();

    assert_eq!(rendered.lines().next(), Some("+"));
    for symbol in ["*", "2", "3", "5"] {
        assert!(rendered.contains(symbol), "missing {symbol} in:\n{rendered}");
    }
}
