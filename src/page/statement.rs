use crate::{
    foundation::core::{BezPath, Point, Rgba8, Viewport},
    render::{curve::rough_polyline, scene::Scene},
};

/// Vertical background heading.
pub const HEADING: &str = "ステートメント";

/// Heading glyph size (4rem).
const HEADING_FONT_PX: f64 = 64.0;
const HEADING_LINE_HEIGHT: f64 = HEADING_FONT_PX * 1.2;
const CURVE_SCALE: f64 = 2.0;
const CURVE_SEED_STEP: f64 = 0.1;
/// Tailwind `blue-300`.
const HEADING_COLOR: Rgba8 = Rgba8::opaque(0x8E, 0xC5, 0xFF);

/// Body paragraphs of the statement.
pub const PARAGRAPHS: &[&str] = &[
    "コードを書かなくなった。",
    "Cursor、Claude、Geminiを使い分けながら、大枠のレイアウトはIllustratorで組み、画像からレイアウトを起こしてもらう。「spring-layout」「convex hull」と言うだけでアルゴリズムが実装される。",
    "AIに依存するにつれて、コードが手元を離れていく。コードを理解していないから、些細なバグですらAIに「なんとかして」もらう場面が増えてくる。",
    "それでも、実はそれほど悲観していない。AIエージェントには、単なる代替を超えた価値があるからだ。",
    "AIエージェントが提案するコードの「スピード」は、人類が到達しうる最高速度を軽々と超えている。もしコーディングを、ある「目的」を果たすための「道のり」だと見立てるなら、AIエージェントはさながらスポーツカーだろう。徒歩で辿り着ける距離と、車で辿り着ける距離は次元が違う。同じ時間の中で何度も往復することも、これまでよりはるかに遠くを目指すことも可能になる。",
    "この変化によって、「作り方」に向けていた意識の比重が下がり、「何を作るか」への関心が一気に高まった。ある意味では、思考は以前よりもクリアになったと感じている。",
    "しかし皮肉なことに、「何を作るか」という発想は、たいてい「いかに作るか」を考えている最中に生まれてきたものでもある。",
    "コーディングの途中で、この変数をあえて大きくしたらどうなるだろうか、とか、ここで脇道に逸れたら何が起こるだろうか、といったことを考える。そうした「寄り道」のような操作に、もっと期待してもいいのではないかと思うようになった。",
    "また、「コーディング」という行為に下支えされていなければ説明できないものが確かに存在する。それは印象や感覚といった言葉ではうまく言い表せない。そうしたものをプロンプトだけで実現しようとすると、結局はコーディングとほとんど変わらない粒度の説明を要求されることになる。",
    "だから、「walking」する。今の自分が把握できているのは、いわば「首都」や「観光地」のような、誰かがすでに見たこと・聞いたことのある場所ばかりだ。プロンプトで記述できるのも、そうした目立つ地点に限られている。",
    "そこへ一直線に向かうのではなく、道中にあるものを見つける実践をしたい。緩やかに目的地を意識しながらも、脇道に逸れることそのものを重視する。散歩のような移動。",
    "なんのことはない。「自分の手でコーディングする」ことのレトロニムとして、これを「Walking Coding」と呼び、自覚的に実践する。",
    "つくっている最中に考えていることを記録する。",
    "それを「walking」というアナロジーのもとで分析する。",
];

/// Heading characters stacked down the centre of the viewport.
pub fn heading_positions(viewport: Viewport) -> Vec<(char, Point)> {
    let count = HEADING.chars().count();
    let total = count.saturating_sub(1) as f64 * HEADING_LINE_HEIGHT;
    let top = viewport.height / 2.0 - total / 2.0;
    HEADING
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            (
                ch,
                Point::new(viewport.width / 2.0, top + i as f64 * HEADING_LINE_HEIGHT),
            )
        })
        .collect()
}

/// Rough curve threading the heading characters.
pub fn heading_curve(viewport: Viewport) -> BezPath {
    let points: Vec<Point> = heading_positions(viewport).into_iter().map(|(_, p)| p).collect();
    rough_polyline(&points, CURVE_SCALE, |i| i as f64 * CURVE_SEED_STEP)
}

/// Static background of the statement page.
pub fn statement_scene(viewport: Viewport) -> Scene {
    let mut scene = Scene::new();
    scene.stroke(heading_curve(viewport), HEADING_COLOR, 1.0, 1.0);
    for (ch, at) in heading_positions(viewport) {
        scene.label(ch.to_string(), at, HEADING_FONT_PX, 1.0);
    }
    scene
}

#[cfg(test)]
#[path = "../../tests/unit/page/statement.rs"]
mod tests;
