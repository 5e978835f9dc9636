use css_quiz::models::{load_content_dir, ContentStore, Mcq};
use css_quiz::services::markup;
use css_quiz::services::{paginate, paper_detail, PaperDetail, PAGE_SIZE};
use css_quiz::workflow::{AdvanceOutcome, QuizSnapshot, QuizState, ResultBand};
use css_quiz::{McqBrowser, McqFilters, PaperBrowser, Quiz, QuizAction, SolvedBrowser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

fn mcq(id: usize, topic: &str, correct_answer: usize) -> Mcq {
    Mcq {
        id: id.to_string(),
        year: Some(2020),
        paper: Some(1),
        question: format!("Question {}", id),
        options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        correct_answer,
        explanation: String::new(),
        topic: topic.to_string(),
        difficulty: None,
    }
}

async fn fixture_store() -> ContentStore {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/content");
    load_content_dir(dir).await.expect("加载题库失败")
}

#[test]
fn scenario_a_topic_filter_and_empty_start() {
    let mcqs: Vec<Mcq> = (1..=3).map(|i| mcq(i, "Networks", 0)).collect();
    let mut quiz = Quiz::new(&mcqs);

    quiz.dispatch(QuizAction::Configure(McqFilters::new().with_topic("Networks")));
    assert_eq!(quiz.eligible_count(), 3);

    quiz.dispatch(QuizAction::Configure(McqFilters::new().with_topic("OS")));
    assert_eq!(quiz.eligible_count(), 0);
    assert!(!quiz.dispatch(QuizAction::Start));
    assert!(matches!(quiz.state(), QuizState::Configuring));
}

#[test]
fn scenario_b_three_of_five() {
    let mcqs: Vec<Mcq> = (1..=5).map(|i| mcq(i, "OS", i % 4)).collect();
    let mut quiz = Quiz::new(&mcqs);
    let mut rng = StdRng::seed_from_u64(11);
    assert!(quiz.start_with(&mut rng));

    let mut presented = Vec::new();
    for position in 0..5 {
        let question = match quiz.snapshot() {
            QuizSnapshot::InProgress(view) => {
                assert_eq!(view.index, position);
                assert_eq!(view.total, 5);
                assert!(!view.revealed);
                view.question
            }
            other => panic!("unexpected snapshot: {:?}", other),
        };
        presented.push(question.id.clone());

        // 第 1、3、5 题答对，第 2、4 题答错
        let choice = if position % 2 == 0 {
            question.correct_answer
        } else {
            (question.correct_answer + 1) % question.options.len()
        };
        assert!(quiz.select_option(choice));
        assert_eq!(
            quiz.advance(),
            AdvanceOutcome::Revealed {
                correct: position % 2 == 0
            }
        );
        quiz.advance();
    }

    match quiz.snapshot() {
        QuizSnapshot::Completed {
            score,
            total,
            percentage,
            band,
            review,
        } => {
            assert_eq!(score, 3);
            assert_eq!(total, 5);
            assert_eq!(percentage, 60);
            assert_eq!(band, ResultBand::Fair);
            assert_eq!(review.len(), 5);
            let review_order: Vec<String> =
                review.iter().map(|r| r.question.id.clone()).collect();
            assert_eq!(review_order, presented);
            let correctness: Vec<bool> = review.iter().map(|r| r.correct).collect();
            assert_eq!(correctness, [true, false, true, false, true]);
        }
        other => panic!("unexpected snapshot: {:?}", other),
    }
}

#[test]
fn scenario_c_pagination() {
    let records: Vec<Mcq> = (0..45).map(|i| mcq(i, "OS", 0)).collect();

    assert_eq!(paginate(&records, 1, PAGE_SIZE), &records[0..20]);
    assert_eq!(paginate(&records, 3, PAGE_SIZE), &records[40..45]);

    let mut browser = McqBrowser::new(&records);
    assert_eq!(browser.total_pages(), 3);
    assert!(!browser.go_to(4), "越界页码不应被接受");
}

#[tokio::test]
async fn scenario_d_paper_join() {
    let store = fixture_store().await;
    let paper_2020_1 = store
        .papers()
        .find(|p| p.id == "css-2020-paper-1")
        .expect("缺少 2020 年第一张试卷");

    match paper_detail(paper_2020_1, store.mcqs()) {
        PaperDetail::Available(mcqs) => {
            let ids: Vec<&str> = mcqs.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids, ["1", "2"]);
        }
        PaperDetail::NotYetAvailable => panic!("2020 年第一张试卷应该有选择题"),
    }

    let mut browser = PaperBrowser::new(&store);
    assert!(browser.open("css-2021-paper-2"));
    assert_eq!(browser.detail(), Some(PaperDetail::NotYetAvailable));
}

#[tokio::test]
async fn test_scoring_matches_selected_indices() {
    let store = fixture_store().await;
    let mut quiz = Quiz::new(store.mcqs());
    let mut rng = StdRng::seed_from_u64(5);
    assert!(quiz.start_with(&mut rng));

    let mut expected = 0;
    let mut total = 0;
    loop {
        let QuizSnapshot::InProgress(view) = quiz.snapshot() else {
            break;
        };
        // 总是选 B
        if view.question.correct_answer == 1 {
            expected += 1;
        }
        total += 1;
        quiz.select_option(1);
        quiz.advance();
        quiz.advance();
    }

    assert_eq!(total, store.mcqs().len());
    let QuizSnapshot::Completed { score, percentage, .. } = quiz.snapshot() else {
        panic!("测验应该已完成");
    };
    assert_eq!(score, expected);
    let expected_pct = ((100.0 * expected as f64) / total as f64).round() as u32;
    assert_eq!(percentage, expected_pct);
}

#[tokio::test]
async fn test_solved_answers_render_safely() {
    let store = fixture_store().await;
    let mut browser = SolvedBrowser::new(store.solved_questions());

    browser.toggle("2021-p2-q5");
    let parts = browser.expanded_parts();
    assert_eq!(parts.len(), 1);
    assert!(!parts[0].answer_html.contains("<b>"));
    assert!(parts[0]
        .explanation_html
        .as_deref()
        .is_some_and(|html| html.contains("<strong>3NF</strong>")));

    browser.toggle("2020-p1-q2");
    let parts = browser.expanded_parts();
    assert_eq!(parts.len(), 2);
    assert!(parts[1].answer_html.contains("<pre><code class=\"language-c\">"));
    assert!(!parts[1].answer_html.contains("<strong>"));

    let plain = markup::parse("**Mutual exclusion** first").to_plain_text();
    assert_eq!(plain, "Mutual exclusion first");
}
