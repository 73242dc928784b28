use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizroom_core::teacher::{assign_quiz_to_student, create_quiz};
use quizroom_core::{EntityId, Identified, Question, SharedQuiz, Student};

fn make_quiz(size: usize) -> (SharedQuiz, Vec<EntityId>) {
    let questions: Vec<Question> = (0..size)
        .map(|i| {
            let mut q = Question::new(format!("q{i}"), vec!["a".into(), "b".into()], "a")
                .with_weight((i % 5) as u32);
            if i % 2 == 0 {
                q.solve("a");
            }
            q
        })
        .collect();
    let ids = questions.iter().map(|q| q.id().clone()).collect();
    (SharedQuiz::new(create_quiz(questions)), ids)
}

fn bench_quiz_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_grade");

    for size in [10, 100, 1000] {
        let (quiz, _) = make_quiz(size);
        group.bench_function(format!("questions={size}"), |b| {
            b.iter(|| black_box(&quiz).get_grade())
        });
    }

    group.finish();
}

fn bench_student_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("student_solve");

    let mut student = Student::new("bench");
    let mut last = None;
    for _ in 0..20 {
        let (quiz, ids) = make_quiz(50);
        assign_quiz_to_student(&mut student, &quiz);
        last = Some((quiz.id().clone(), ids[49].clone()));
    }
    let Some((quiz_id, question_id)) = last else {
        return;
    };

    group.bench_function("last_quiz_last_question", |b| {
        b.iter(|| {
            student.solve_question(
                black_box(quiz_id.as_str()),
                black_box(question_id.as_str()),
                black_box("a"),
            )
        })
    });

    group.bench_function("total_grade", |b| {
        b.iter(|| black_box(&student).get_total_grade())
    });

    group.finish();
}

criterion_group!(benches, bench_quiz_grade, bench_student_solve);
criterion_main!(benches);
