/// Splits `text` into `n` consecutive slices balanced by word count.
///
/// The first `words % n` slices receive one extra word, so slice lengths differ
/// by at most one. Slices are empty when there are fewer words than slices.
/// For `n <= 1` the text is returned untouched as the only element.
pub fn split_proportionally(text: &str, n: usize) -> Vec<String> {
    if n <= 1 {
        return vec![text.to_string()];
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let base = words.len() / n;
    let extra = words.len() % n;

    let mut slices = Vec::with_capacity(n);
    let mut pos = 0;
    for i in 0..n {
        let size = base + usize::from(i < extra);
        slices.push(words[pos..pos + size].join(" "));
        pos += size;
    }
    slices
}
