pub fn stage0(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n').map(|l| l.trim().to_string()).collect()
}
